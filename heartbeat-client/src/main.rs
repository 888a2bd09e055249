use std::sync::Arc;

use heartbeat_client::{ClickToFetch, ClientConfig, ConsoleNotifier, HttpHeartbeatSource, Page};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::load()?;
    let page = Page::new().with_button(config.element_id.as_str());
    let button = page
        .element_by_id(&config.element_id)
        .ok_or_else(|| anyhow::anyhow!("No element with id {}", config.element_id))?;

    let handler = ClickToFetch::new(
        button.clone(),
        Arc::new(HttpHeartbeatSource::new(config.endpoint.as_str())),
        Arc::new(ConsoleNotifier::stdout()),
    );
    handler.on_page_ready();
    log::info!(
        "Press Enter to click #{} (GET {}), Ctrl-D to quit",
        config.element_id,
        config.endpoint
    );

    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while lines.next_line().await?.is_some() {
        in_flight.retain(|task| !task.is_finished());
        in_flight.extend(button.click());
    }

    for task in in_flight {
        if let Err(e) = task.await {
            log::error!("Activation task failed: {}", e);
        }
    }
    Ok(())
}

#[ctor::ctor]
fn init() {
    std::env::set_var("RUST_BACKTRACE", "1");
    env_logger::Builder::from_default_env()
        .filter(None, log::LevelFilter::Info)
        .init();
}
