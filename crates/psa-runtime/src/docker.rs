use crate::{ContainerSource, Error, Result};
use bollard::Docker;
use bollard::container::ListContainersOptions;
use bollard::models::{ContainerSummary, MountPoint as DockerMountPoint, Port};
use psa_types::{ContainerRecord, MountKind, MountPoint, NetworkEndpoint, PortMapping};
use tokio::runtime::Runtime;

/// Container source backed by the local Docker Engine API.
///
/// Owns a current-thread runtime so callers can stay synchronous; each
/// listing blocks until the daemon answers.
pub struct DockerSource {
    docker: Docker,
    runtime: Runtime,
}

impl DockerSource {
    /// Connect using `DOCKER_HOST` or the platform's default socket.
    pub fn connect() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;

        let docker = {
            let _guard = runtime.enter();
            Docker::connect_with_local_defaults().map_err(Error::Connect)?
        };

        Ok(Self { docker, runtime })
    }
}

impl ContainerSource for DockerSource {
    fn list_all(&self) -> Result<Vec<ContainerRecord>> {
        let options = ListContainersOptions::<String> {
            all: true,
            ..Default::default()
        };

        let summaries = self
            .runtime
            .block_on(self.docker.list_containers(Some(options)))
            .map_err(Error::ListingUnavailable)?;

        tracing::debug!(count = summaries.len(), "listed containers");

        Ok(summaries.into_iter().map(record_from_summary).collect())
    }
}

fn record_from_summary(summary: ContainerSummary) -> ContainerRecord {
    let networks = summary
        .network_settings
        .and_then(|settings| settings.networks)
        .unwrap_or_default()
        .into_iter()
        .map(|(name, endpoint)| {
            let address = endpoint.ip_address.unwrap_or_default();
            (name, NetworkEndpoint { address })
        })
        .collect();

    ContainerRecord {
        id: summary.id.unwrap_or_default(),
        names: summary.names.unwrap_or_default(),
        image: summary.image.unwrap_or_default(),
        command: summary.command.unwrap_or_default(),
        created_at: summary.created.unwrap_or_default(),
        raw_status: summary.status.unwrap_or_default(),
        ports: summary
            .ports
            .unwrap_or_default()
            .into_iter()
            .map(port_mapping)
            .collect(),
        networks,
        mounts: summary
            .mounts
            .unwrap_or_default()
            .into_iter()
            .map(mount_point)
            .collect(),
    }
}

fn port_mapping(port: Port) -> PortMapping {
    let protocol = port
        .typ
        .map(|typ| typ.to_string())
        .filter(|typ| !typ.is_empty())
        .unwrap_or_else(|| "tcp".to_string());

    PortMapping {
        public_port: port.public_port,
        private_port: port.private_port,
        protocol,
    }
}

fn mount_point(mount: DockerMountPoint) -> MountPoint {
    let kind = mount
        .typ
        .map(|typ| typ.to_string())
        .filter(|typ| !typ.is_empty())
        .map(MountKind::from)
        .unwrap_or_else(|| MountKind::Other("unknown".to_string()));

    MountPoint {
        kind,
        name: mount.name.unwrap_or_default(),
        source: mount.source.unwrap_or_default(),
        destination: mount.destination.unwrap_or_default(),
    }
}
