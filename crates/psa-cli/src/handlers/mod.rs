pub mod list;
pub mod metadata;
pub mod watch;

use crate::presentation::{Renderer, Verbosity};
use crate::ui::TerminalWriter;
use chrono::{DateTime, Utc};
use psa_types::ContainerRecord;

/// What to show, shared by one-shot and watch mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Regex over names and image; empty means no filtering
    pub pattern: String,
    pub verbosity: Verbosity,
}

/// Filter, enrich, sort and render one listing to the terminal.
///
/// An invalid pattern is reported on the error stream and the listing is
/// shown unfiltered.
pub(crate) fn emit_listing<T: TerminalWriter + ?Sized>(
    terminal: &mut T,
    renderer: &Renderer,
    records: Vec<ContainerRecord>,
    options: &ListOptions,
    now: DateTime<Utc>,
) {
    let prepared = psa_engine::prepare(records, &options.pattern, now);

    if let Some(warning) = prepared.warning {
        terminal.write_error(&format!("Warning: {}", warning));
    }

    for line in renderer.render(&prepared.records, options.verbosity, now) {
        terminal.write_line(&line);
    }
}
