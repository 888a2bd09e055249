use anyhow::Context;
use async_trait::async_trait;
use heartbeat_common::HeartbeatResponse;

/// Where heartbeat responses come from.
#[async_trait]
pub trait HeartbeatSource: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<HeartbeatResponse>;
}

/// Plain GET against the heartbeat endpoint.
///
/// The status code is never checked: any response whose body parses is
/// handed back as-is.
pub struct HttpHeartbeatSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpHeartbeatSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl HeartbeatSource for HttpHeartbeatSource {
    async fn fetch(&self) -> anyhow::Result<HeartbeatResponse> {
        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.endpoint))?;
        let status = resp.status();
        resp.json::<HeartbeatResponse>()
            .await
            .with_context(|| format!("Unparsable heartbeat body (HTTP {})", status))
    }
}
