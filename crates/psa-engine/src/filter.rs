use crate::Error;
use psa_types::ContainerRecord;
use regex::Regex;

/// Result of filtering a listing.
///
/// An invalid pattern is not fatal: `records` then holds the unfiltered
/// input and `warning` says why.
#[derive(Debug)]
pub struct FilterOutcome {
    pub records: Vec<ContainerRecord>,
    pub warning: Option<Error>,
}

/// Join container names for display, dropping the daemon's leading `/`.
pub fn display_name(names: &[String]) -> String {
    names
        .iter()
        .map(|name| name.strip_prefix('/').unwrap_or(name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keep records whose display name or image matches `pattern`.
pub fn filter_records(records: Vec<ContainerRecord>, pattern: &str) -> FilterOutcome {
    if pattern.is_empty() {
        return FilterOutcome {
            records,
            warning: None,
        };
    }

    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(source) => {
            return FilterOutcome {
                records,
                warning: Some(Error::InvalidFilterPattern {
                    pattern: pattern.to_string(),
                    source,
                }),
            };
        }
    };

    let total = records.len();
    let records: Vec<_> = records
        .into_iter()
        .filter(|record| re.is_match(&display_name(&record.names)) || re.is_match(&record.image))
        .collect();

    tracing::debug!(pattern, total, kept = records.len(), "filtered containers");

    FilterOutcome {
        records,
        warning: None,
    }
}
