use std::io::{Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// User-facing, blocking notification. Returns once the message is shown.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Shows notifications as one `[alert] <message>` line each. A message is
/// written and flushed under a single lock, so concurrent alerts never mix.
pub struct ConsoleNotifier<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn alert(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let shown = writeln!(out, "[alert] {}", message).and_then(|_| out.flush());
        if let Err(e) = shown {
            log::error!("Failed to show notification: {}", e);
        }
    }
}
