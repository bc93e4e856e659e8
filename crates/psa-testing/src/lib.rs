//! Testing infrastructure for docker-psa.
//!
//! - `fixtures`: fluent `ContainerBuilder` and the bundled JSON sample listing
//! - `fakes`: scripted container sources and watch event sources

pub mod fakes;
pub mod fixtures;

pub use fakes::{ScriptedEvents, ScriptedSource, StaticSource};
pub use fixtures::{ContainerBuilder, sample_containers};
