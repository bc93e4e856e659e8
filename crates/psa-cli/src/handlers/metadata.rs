use anyhow::Result;
use serde::Serialize;

/// Subcommand the Docker CLI invokes to discover plugins.
pub const METADATA_COMMAND: &str = "docker-cli-plugin-metadata";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginMetadata {
    pub schema_version: &'static str,
    pub vendor: &'static str,
    pub version: &'static str,
    pub short_description: &'static str,
    #[serde(rename = "URL", skip_serializing_if = "str::is_empty")]
    pub url: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub experimental: bool,
}

impl Default for PluginMetadata {
    fn default() -> Self {
        Self {
            schema_version: "0.1.0",
            vendor: "BitChisel",
            version: env!("CARGO_PKG_VERSION"),
            short_description: "Human-readable format for Docker container listings",
            url: "",
            experimental: false,
        }
    }
}

pub fn handle() -> Result<()> {
    println!("{}", serde_json::to_string(&PluginMetadata::default())?);
    Ok(())
}
