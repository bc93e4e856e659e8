use psa_types::PortMapping;
use std::collections::HashSet;

/// A port entry for the one-line listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactPort {
    /// Not published on the host
    Private(u16),
    /// Published on the same host port
    Same(u16),
    Mapped { public: u16, private: u16 },
}

/// A port entry for the detailed listing, protocol included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedPort<'a> {
    pub public: Option<u16>,
    pub private: u16,
    pub protocol: &'a str,
}

/// Classify ports for compact display, dropping repeated `(public, private)` pairs.
///
/// The daemon reports one entry per protocol and address family, so the same
/// mapping often shows up more than once. The first occurrence wins.
pub fn compact_entries(ports: &[PortMapping]) -> Vec<CompactPort> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(ports.len());

    for port in ports {
        let public = port.published();
        if !seen.insert((public, port.private_port)) {
            continue;
        }

        let entry = match public {
            None => CompactPort::Private(port.private_port),
            Some(public) if public == port.private_port => CompactPort::Same(public),
            Some(public) => CompactPort::Mapped {
                public,
                private: port.private_port,
            },
        };
        entries.push(entry);
    }

    entries
}

/// Ports for detailed display, one entry per input entry.
pub fn detailed_entries(ports: &[PortMapping]) -> Vec<DetailedPort<'_>> {
    ports
        .iter()
        .map(|port| DetailedPort {
            public: port.published(),
            private: port.private_port,
            protocol: &port.protocol,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(public: Option<u16>, private: u16, protocol: &str) -> PortMapping {
        PortMapping {
            public_port: public,
            private_port: private,
            protocol: protocol.to_string(),
        }
    }

    #[test]
    fn test_compact_dedups_identical_mappings() {
        let ports = vec![
            port(Some(8080), 80, "tcp"),
            port(Some(8080), 80, "tcp"),
        ];

        assert_eq!(
            compact_entries(&ports),
            vec![CompactPort::Mapped {
                public: 8080,
                private: 80
            }]
        );
        assert_eq!(detailed_entries(&ports).len(), 2);
    }

    #[test]
    fn test_compact_keeps_first_seen_order() {
        let ports = vec![
            port(Some(443), 443, "tcp"),
            port(None, 9000, "tcp"),
            port(Some(443), 443, "udp"),
            port(Some(8080), 80, "tcp"),
        ];

        assert_eq!(
            compact_entries(&ports),
            vec![
                CompactPort::Same(443),
                CompactPort::Private(9000),
                CompactPort::Mapped {
                    public: 8080,
                    private: 80
                },
            ]
        );
    }

    #[test]
    fn test_zero_public_port_counts_as_unpublished() {
        let ports = vec![port(Some(0), 5432, "tcp"), port(None, 5432, "tcp")];

        assert_eq!(compact_entries(&ports), vec![CompactPort::Private(5432)]);

        let detailed = detailed_entries(&ports);
        assert_eq!(detailed.len(), 2);
        assert!(detailed.iter().all(|entry| entry.public.is_none()));
    }

    #[test]
    fn test_compact_never_repeats_pairs() {
        let ports: Vec<_> = (0..40u16)
            .map(|i| port(Some(8000 + i % 5), 80 + i % 3, "tcp"))
            .collect();

        let entries = compact_entries(&ports);
        let mut pairs = HashSet::new();
        for entry in &entries {
            let pair = match *entry {
                CompactPort::Private(p) => (None, p),
                CompactPort::Same(p) => (Some(p), p),
                CompactPort::Mapped { public, private } => (Some(public), private),
            };
            assert!(pairs.insert(pair), "duplicate {:?}", pair);
        }
        assert_eq!(entries.len(), 15);
        assert_eq!(detailed_entries(&ports).len(), ports.len());
    }

    #[test]
    fn test_empty_ports() {
        assert!(compact_entries(&[]).is_empty());
        assert!(detailed_entries(&[]).is_empty());
    }
}
