use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8083/heartbeat";
pub const DEFAULT_ELEMENT_ID: &str = "clickMe";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub element_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            element_id: DEFAULT_ELEMENT_ID.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from("client.yaml")
    }

    /// Defaults, then the optional yaml file, then `HEARTBEAT_*` variables.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        Ok(Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("element_id", DEFAULT_ELEMENT_ID)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("HEARTBEAT"))
            .build()?
            .try_deserialize()?)
    }
}
