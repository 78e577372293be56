//! Shared selection holder: the one group name both screens agree on.
//!
//! A single optional value, settable by any screen, observable by all.
//! Last write wins; there is no versioning. Cheap to clone and hand to
//! every collaborator.

use std::sync::Arc;

use tokio::sync::watch;

#[derive(Clone)]
pub struct SharedSelection {
    tx: Arc<watch::Sender<Option<String>>>,
}

impl SharedSelection {
    /// New holder with no selection yet.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Publish a selection. Observers see the latest value only.
    pub fn set(&self, name: &str) {
        self.tx.send_replace(Some(name.to_string()));
    }

    /// Current value, if any screen has selected a group yet.
    pub fn get(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    /// Subscribe to selection changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }
}

impl Default for SharedSelection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_last_write_wins() {
        let selection = SharedSelection::new();
        assert_eq!(selection.get(), None);

        selection.set("CS-101");
        selection.set("MA-201");
        assert_eq!(selection.get(), Some("MA-201".to_string()));
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let selection = SharedSelection::new();
        let mut rx = selection.subscribe();

        selection.set("CS-101");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some("CS-101".to_string()));
    }

    #[test]
    fn clones_share_the_same_slot() {
        let a = SharedSelection::new();
        let b = a.clone();
        b.set("CS-101");
        assert_eq!(a.get(), Some("CS-101".to_string()));
    }
}
