// Engine module - status interpretation, filtering and formatting core
// This layer sits between raw container records (types) and CLI presentation

pub mod enrich;
pub mod error;
pub mod filter;
pub mod ports;
pub mod status;
pub mod time;

pub use enrich::{DisplayRecord, enrich};
pub use error::Error;
pub use filter::{FilterOutcome, display_name, filter_records};
pub use ports::{CompactPort, DetailedPort, compact_entries, detailed_entries};
pub use status::{SemanticStatus, StatusCategory, StatusMode, interpret};
pub use time::{humanize_duration, relative_time};

use chrono::{DateTime, Utc};
use psa_types::ContainerRecord;

/// Records ready for rendering, plus any non-fatal filter warning.
#[derive(Debug)]
pub struct Prepared {
    pub records: Vec<DisplayRecord>,
    pub warning: Option<Error>,
}

// Façade API - the filter → enrich → sort pipeline used by both one-shot and watch mode

/// Filter, enrich and sort a freshly fetched listing.
pub fn prepare(records: Vec<ContainerRecord>, pattern: &str, now: DateTime<Utc>) -> Prepared {
    let FilterOutcome { records, warning } = filter_records(records, pattern);

    Prepared {
        records: enrich(records, now),
        warning,
    }
}
