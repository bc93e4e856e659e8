//! Container fixtures.

use psa_types::{ContainerRecord, MountKind, MountPoint, NetworkEndpoint, PortMapping};

const SAMPLE_CONTAINERS: &str = include_str!("../samples/containers.json");

/// The bundled sample listing: a healthy web server, an unhealthy API,
/// an exited job, a fresh container and a restarting worker.
pub fn sample_containers() -> Vec<ContainerRecord> {
    serde_json::from_str(SAMPLE_CONTAINERS).expect("samples/containers.json is valid")
}

/// Fluent builder for `ContainerRecord` test data.
///
/// # Example
/// ```
/// use psa_testing::ContainerBuilder;
///
/// let record = ContainerBuilder::new("4f1c2b3a9d8e")
///     .name("/web")
///     .image("nginx:1.27")
///     .status("Up 3 hours (healthy)")
///     .port(Some(8080), 80, "tcp")
///     .build();
///
/// assert_eq!(record.names, vec!["/web"]);
/// ```
#[derive(Debug, Clone)]
pub struct ContainerBuilder {
    record: ContainerRecord,
}

impl ContainerBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: ContainerRecord {
                id: id.to_string(),
                image: "busybox:latest".to_string(),
                command: "sh".to_string(),
                raw_status: "Up 1 minute".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.names.push(name.to_string());
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.record.image = image.to_string();
        self
    }

    pub fn command(mut self, command: &str) -> Self {
        self.record.command = command.to_string();
        self
    }

    pub fn created_at(mut self, epoch_secs: i64) -> Self {
        self.record.created_at = epoch_secs;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.record.raw_status = status.to_string();
        self
    }

    pub fn port(mut self, public: Option<u16>, private: u16, protocol: &str) -> Self {
        self.record.ports.push(PortMapping {
            public_port: public,
            private_port: private,
            protocol: protocol.to_string(),
        });
        self
    }

    pub fn network(mut self, name: &str, address: &str) -> Self {
        self.record.networks.insert(
            name.to_string(),
            NetworkEndpoint {
                address: address.to_string(),
            },
        );
        self
    }

    pub fn volume(mut self, name: &str, destination: &str) -> Self {
        self.record.mounts.push(MountPoint {
            kind: MountKind::Volume,
            name: name.to_string(),
            source: format!("/var/lib/docker/volumes/{}/_data", name),
            destination: destination.to_string(),
        });
        self
    }

    pub fn bind(mut self, source: &str, destination: &str) -> Self {
        self.record.mounts.push(MountPoint {
            kind: MountKind::Bind,
            name: String::new(),
            source: source.to_string(),
            destination: destination.to_string(),
        });
        self
    }

    pub fn mount(mut self, kind: &str, destination: &str) -> Self {
        self.record.mounts.push(MountPoint {
            kind: MountKind::from(kind),
            name: String::new(),
            source: String::new(),
            destination: destination.to_string(),
        });
        self
    }

    pub fn build(self) -> ContainerRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_containers_load() {
        let containers = sample_containers();
        assert_eq!(containers.len(), 5);
        assert!(containers.iter().all(|c| !c.names.is_empty()));
    }
}
