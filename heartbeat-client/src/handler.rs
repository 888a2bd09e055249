use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::notify::Notifier;
use crate::page::{Button, ClickListener};
use crate::source::HeartbeatSource;

pub const NO_DATA_MESSAGE: &str = "No blog data received";
pub const ERROR_MESSAGE: &str = "Error occurred. Check the console for details.";

/// What a single activation ended in.
#[derive(Debug)]
pub enum ActivationOutcome {
    Content(String),
    NoData,
    Failed(anyhow::Error),
}

impl ActivationOutcome {
    /// Text of the notification shown for this outcome.
    pub fn message(&self) -> String {
        match self {
            ActivationOutcome::Content(content) => format!("Blog content: {}", content),
            ActivationOutcome::NoData => NO_DATA_MESSAGE.to_string(),
            ActivationOutcome::Failed(_) => ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ActivationOutcome::Failed(_))
    }
}

/// Wires a button to the heartbeat endpoint: every click fetches once and
/// tells the user what came back.
pub struct ClickToFetch {
    button: Arc<Button>,
    source: Arc<dyn HeartbeatSource>,
    notifier: Arc<dyn Notifier>,
    bound: AtomicBool,
}

impl ClickToFetch {
    pub fn new(
        button: Arc<Button>,
        source: Arc<dyn HeartbeatSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Arc<Self> {
        Arc::new(Self {
            button,
            source,
            notifier,
            bound: AtomicBool::new(false),
        })
    }

    /// Attaches the click listener. Later calls are no-ops.
    pub fn on_page_ready(self: &Arc<Self>) {
        if self
            .bound
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("Listener already bound to #{}", self.button.id());
            return;
        }
        self.button.add_click_listener(Arc::new(Listener(self.clone())));
        log::info!("Bound click listener to #{}", self.button.id());
    }

    pub async fn on_activate(&self) -> ActivationOutcome {
        let requested_at = Utc::now();
        let content = self.source.fetch().await.and_then(|resp| {
            log::info!(
                "Heartbeat response (requested {}): {:?}",
                requested_at.to_rfc3339(),
                resp
            );
            resp.blog_content()
        });
        let outcome = match content {
            Ok(Some(content)) => ActivationOutcome::Content(content),
            Ok(None) => ActivationOutcome::NoData,
            Err(e) => {
                log::error!("Error (requested {}): {:#}", requested_at.to_rfc3339(), e);
                ActivationOutcome::Failed(e)
            }
        };
        self.notifier.alert(&outcome.message());
        outcome
    }
}

struct Listener(Arc<ClickToFetch>);

impl ClickListener for Listener {
    fn on_click(&self) -> JoinHandle<()> {
        let handler = self.0.clone();
        tokio::spawn(async move {
            handler.on_activate().await;
        })
    }
}
