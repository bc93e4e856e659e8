use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One entry of a container listing, as reported by the runtime.
///
/// Records are fetched fresh for every listing and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: String,
    /// Names as the daemon reports them, usually with a leading `/`
    #[serde(default)]
    pub names: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub command: String,
    /// Creation time in epoch seconds
    pub created_at: i64,
    /// Free-text lifecycle status, e.g. "Up 3 hours (healthy)"
    pub raw_status: String,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkEndpoint>,
    #[serde(default)]
    pub mounts: Vec<MountPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    #[serde(default)]
    pub public_port: Option<u16>,
    pub private_port: u16,
    #[serde(default = "default_protocol")]
    pub protocol: String,
}

fn default_protocol() -> String {
    "tcp".to_string()
}

impl PortMapping {
    /// Published host port, treating an explicit zero as unpublished
    pub fn published(&self) -> Option<u16> {
        self.public_port.filter(|port| *port != 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkEndpoint {
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountPoint {
    pub kind: MountKind,
    /// Volume name; empty for bind mounts
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MountKind {
    Volume,
    Bind,
    Other(String),
}

impl MountKind {
    pub fn as_str(&self) -> &str {
        match self {
            MountKind::Volume => "volume",
            MountKind::Bind => "bind",
            MountKind::Other(kind) => kind,
        }
    }
}

impl fmt::Display for MountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for MountKind {
    fn from(s: &str) -> Self {
        match s {
            "volume" => MountKind::Volume,
            "bind" => MountKind::Bind,
            other => MountKind::Other(other.to_string()),
        }
    }
}

impl From<String> for MountKind {
    fn from(s: String) -> Self {
        MountKind::from(s.as_str())
    }
}

impl From<MountKind> for String {
    fn from(kind: MountKind) -> Self {
        kind.as_str().to_string()
    }
}
