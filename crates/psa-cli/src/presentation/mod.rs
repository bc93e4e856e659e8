//! # Presentation Layer
//!
//! Turns prepared `DisplayRecord`s into text lines. Styling lives in an
//! immutable [`Theme`] handed to the [`Renderer`]; nothing here prints.
//!
//! ```text
//! [ Handler ] --> [ psa_engine::prepare ] --> [ Renderer ] --> lines --> [ TerminalWriter ]
//!                    (filter/enrich/sort)       (layout)                  (stdout/stderr)
//! ```

pub mod ports;
pub mod renderer;
pub mod status;
pub mod theme;

pub use renderer::{NO_CONTAINERS, Renderer, Verbosity};
pub use theme::Theme;
