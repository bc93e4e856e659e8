use crate::filter::display_name;
use crate::status::{SemanticStatus, StatusMode, interpret};
use chrono::{DateTime, Duration, Utc};
use psa_types::ContainerRecord;

/// A container record with the fields the renderer needs precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub record: ContainerRecord,
    pub display_name: String,
    pub created: DateTime<Utc>,
    /// Time since creation, whole seconds, never negative
    pub age: Duration,
    pub status: SemanticStatus,
    pub status_compact: SemanticStatus,
}

impl DisplayRecord {
    pub fn new(record: ContainerRecord, now: DateTime<Utc>) -> Self {
        let created = DateTime::from_timestamp(record.created_at, 0).unwrap_or_default();
        let age = Duration::seconds(now.signed_duration_since(created).num_seconds().max(0));

        Self {
            display_name: display_name(&record.names),
            status: interpret(&record.raw_status, StatusMode::Full),
            status_compact: interpret(&record.raw_status, StatusMode::Compact),
            created,
            age,
            record,
        }
    }

    pub fn status_for(&self, mode: StatusMode) -> &SemanticStatus {
        match mode {
            StatusMode::Compact => &self.status_compact,
            StatusMode::Full => &self.status,
        }
    }

    /// First 12 characters of the container id, as `docker ps` shows it
    pub fn short_id(&self) -> &str {
        let id = &self.record.id;
        match id.char_indices().nth(12) {
            Some((idx, _)) => &id[..idx],
            None => id,
        }
    }
}

/// Build display records and order them newest first.
///
/// The sort is stable, so containers created in the same second keep their
/// listing order.
pub fn enrich(records: Vec<ContainerRecord>, now: DateTime<Utc>) -> Vec<DisplayRecord> {
    let mut display: Vec<_> = records
        .into_iter()
        .map(|record| DisplayRecord::new(record, now))
        .collect();

    display.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));
    display
}
