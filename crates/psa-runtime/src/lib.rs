pub mod config;
pub mod docker;
pub mod error;
pub mod events;
pub mod source;

pub use config::{ColorChoice, Config, DisplayConfig, WatchConfig};
pub use docker::DockerSource;
pub use error::{Error, Result};
pub use events::{EventSource, IntervalEvents, WatchEvent};
pub use source::ContainerSource;
