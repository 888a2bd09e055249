pub mod config;
pub mod handler;
pub mod notify;
pub mod page;
pub mod source;

pub use config::ClientConfig;
pub use handler::{ActivationOutcome, ClickToFetch};
pub use notify::{ConsoleNotifier, Notifier};
pub use page::{Button, ClickListener, Page};
pub use source::{HeartbeatSource, HttpHeartbeatSource};
