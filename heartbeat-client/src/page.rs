//! A minimal stand-in for the document the handler is hosted in: buttons
//! addressable by id, each carrying its own click listeners.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;

/// Receives clicks from a [`Button`]. Each click starts its own task.
pub trait ClickListener: Send + Sync {
    fn on_click(&self) -> JoinHandle<()>;
}

pub struct Button {
    id: String,
    listeners: Mutex<Vec<Arc<dyn ClickListener>>>,
}

impl Button {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn add_click_listener(&self, listener: Arc<dyn ClickListener>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Dispatches one click to every listener and hands back the tasks it
    /// started. Must be called from within a tokio runtime.
    pub fn click(&self) -> Vec<JoinHandle<()>> {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        listeners.iter().map(|l| l.on_click()).collect()
    }
}

#[derive(Default)]
pub struct Page {
    elements: HashMap<String, Arc<Button>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, id: impl Into<String>) -> Self {
        let button = Arc::new(Button::new(id));
        self.elements.insert(button.id().to_string(), button);
        self
    }

    pub fn element_by_id(&self, id: &str) -> Option<Arc<Button>> {
        self.elements.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(Arc<AtomicUsize>);

    impl ClickListener for Counter {
        fn on_click(&self) -> JoinHandle<()> {
            let hits = self.0.clone();
            tokio::spawn(async move {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        }
    }

    #[tokio::test]
    async fn click_reaches_every_listener() {
        let hits = Arc::new(AtomicUsize::new(0));
        let button = Button::new("clickMe");
        button.add_click_listener(Arc::new(Counter(hits.clone())));
        button.add_click_listener(Arc::new(Counter(hits.clone())));
        assert_eq!(button.listener_count(), 2);

        for task in button.click() {
            task.await.unwrap();
        }
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn click_without_listeners_does_nothing() {
        let button = Button::new("clickMe");
        assert!(button.click().is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let page = Page::new().with_button("clickMe");
        assert_eq!(page.element_by_id("clickMe").unwrap().id(), "clickMe");
        assert!(page.element_by_id("other").is_none());
    }
}
