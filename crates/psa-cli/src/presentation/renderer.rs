use super::ports::{format_compact, format_detailed};
use super::status::format_status;
use super::theme::Theme;
use chrono::{DateTime, Local, Utc};
use psa_engine::{DisplayRecord, StatusMode, humanize_duration, relative_time};
use psa_types::MountKind;

pub const NO_CONTAINERS: &str = "No containers found";

const INDENT: &str = "   ";
const ITEM_INDENT: &str = "      ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// One line per container
    #[default]
    Compact,
    /// Multi-line blocks with age, command and detailed ports
    Verbose,
    /// Verbose plus networks and mounts
    VeryVerbose,
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        match level {
            0 => Verbosity::Compact,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        }
    }
}

/// Lays out display records as text lines at a given verbosity.
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(
        &self,
        records: &[DisplayRecord],
        verbosity: Verbosity,
        now: DateTime<Utc>,
    ) -> Vec<String> {
        if records.is_empty() {
            return vec![NO_CONTAINERS.to_string()];
        }

        let mut lines = vec![String::new()];

        match verbosity {
            Verbosity::Compact => {
                lines.extend(records.iter().map(|record| self.compact_line(record)));
            }
            Verbosity::Verbose | Verbosity::VeryVerbose => {
                let divider = self.theme.divider();
                lines.push(divider.clone());
                for (i, record) in records.iter().enumerate() {
                    if i > 0 {
                        lines.push(divider.clone());
                    }
                    self.push_block(&mut lines, record, verbosity, now);
                }
                lines.push(divider);
            }
        }

        lines.push(String::new());
        lines
    }

    fn compact_line(&self, record: &DisplayRecord) -> String {
        let theme = &self.theme;

        let ports = format_compact(&record.record.ports, theme);
        let ports_segment = if ports.is_empty() {
            String::new()
        } else {
            format!(" | Ports: {}", ports)
        };

        format!(
            "{} | {} | {}{}",
            format_status(record.status_for(StatusMode::Compact), theme),
            theme.paint(theme.name, &record.display_name),
            theme.paint(theme.image, &record.record.image),
            ports_segment
        )
    }

    fn push_block(
        &self,
        lines: &mut Vec<String>,
        record: &DisplayRecord,
        verbosity: Verbosity,
        now: DateTime<Utc>,
    ) {
        let theme = &self.theme;
        let container = &record.record;

        lines.push(format!(
            "🐋 {} | {}",
            theme.paint(theme.container_id, record.short_id()),
            theme.paint(theme.name, &record.display_name)
        ));

        let created = format!(
            "{} ({})",
            relative_time(record.created, now),
            record
                .created
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        );
        lines.push(format!(
            "{}{} | Age: {} | Created: {}",
            INDENT,
            format_status(record.status_for(StatusMode::Full), theme),
            theme.paint(theme.dim, humanize_duration(record.age)),
            theme.paint(theme.dim, created)
        ));

        lines.push(format!(
            "{}Image: {} | Command: {}",
            INDENT,
            theme.paint(theme.image, &container.image),
            theme.paint(theme.command, &container.command)
        ));

        if !container.ports.is_empty() {
            lines.push(format!(
                "{}Ports: {}",
                INDENT,
                format_detailed(&container.ports, theme)
            ));
        }

        if verbosity < Verbosity::VeryVerbose {
            return;
        }

        if !container.networks.is_empty() {
            lines.push(format!("{}Networks:", INDENT));
            for (name, endpoint) in &container.networks {
                lines.push(format!(
                    "{}• {} ({})",
                    ITEM_INDENT,
                    theme.paint(theme.bold, name),
                    theme.paint(theme.dim, &endpoint.address)
                ));
            }
        }

        if !container.mounts.is_empty() {
            lines.push(format!("{}Volumes:", INDENT));
            for mount in &container.mounts {
                // Only named volumes and bind mounts get an entry
                let origin = match &mount.kind {
                    MountKind::Volume => mount.name.as_str(),
                    MountKind::Bind => mount.source.as_str(),
                    MountKind::Other(_) => continue,
                };
                lines.push(format!(
                    "{}• {} → {}",
                    ITEM_INDENT,
                    theme.paint(theme.bold, origin),
                    theme.paint(theme.dim, &mount.destination)
                ));
            }
        }
    }
}
