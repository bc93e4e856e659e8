use super::theme::Theme;
use psa_engine::{CompactPort, compact_entries, detailed_entries};
use psa_types::PortMapping;

/// One-line port summary: deduplicated, protocol omitted.
pub fn format_compact(ports: &[PortMapping], theme: &Theme) -> String {
    compact_entries(ports)
        .into_iter()
        .map(|entry| match entry {
            CompactPort::Private(private) => private.to_string(),
            CompactPort::Same(public) => theme.paint(theme.port_public, public),
            CompactPort::Mapped { public, private } => format!(
                "{}:{}",
                theme.paint(theme.port_public, public),
                theme.paint(theme.dim, private)
            ),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full port list with protocols, one entry per reported binding.
pub fn format_detailed(ports: &[PortMapping], theme: &Theme) -> String {
    detailed_entries(ports)
        .into_iter()
        .map(|entry| match entry.public {
            Some(public) => format!(
                "{}:{}/{}",
                theme.paint(theme.port_public, public),
                entry.private,
                entry.protocol
            ),
            None => format!("{}/{}", entry.private, entry.protocol),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
