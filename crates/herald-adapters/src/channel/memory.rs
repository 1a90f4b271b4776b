//! In-memory notifier adapter for testing.

use std::sync::{Arc, RwLock};

use herald_core::application::ports::Notifier;

/// In-memory notifier for testing.
///
/// Records every dispatched message instead of writing anywhere. Clones
/// share the same buffer, so a test can keep one handle while the service
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    sent: Arc<RwLock<Vec<String>>>,
}

impl MemoryNotifier {
    /// Create a new empty memory notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages dispatched so far, in order (testing helper).
    pub fn sent(&self) -> Vec<String> {
        self.sent.read().unwrap().clone()
    }

    /// Clear all recorded messages.
    pub fn clear(&self) {
        self.sent.write().unwrap().clear();
    }
}

impl Notifier for MemoryNotifier {
    fn send(&self, message: &str) {
        self.sent.write().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.send("first");
        notifier.send("second");
        assert_eq!(notifier.sent(), vec!["first", "second"]);
    }

    #[test]
    fn clones_share_the_buffer() {
        let notifier = MemoryNotifier::new();
        let handle = notifier.clone();
        notifier.send("seen by both");
        assert_eq!(handle.sent(), vec!["seen by both"]);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let notifier = MemoryNotifier::new();
        notifier.send("gone");
        notifier.clear();
        assert!(notifier.sent().is_empty());
    }
}
