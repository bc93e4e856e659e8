mod args;
mod commands;
pub mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;
pub mod ui;

pub use args::{Cli, Invocation, NormalizedArgs, classify, normalize_args};
pub use commands::run;
