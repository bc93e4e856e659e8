pub mod container;

pub use container::*;
