//! Email delivery adapter.

use herald_core::application::ports::Notifier;
use tracing::debug;

/// Production email notifier writing to stdout.
///
/// The "Sending Email: " label is part of the output contract; tests assert
/// it via [`EmailNotifier::render_line`].
#[derive(Debug, Clone, Copy)]
pub struct EmailNotifier;

impl EmailNotifier {
    /// Create a new email notifier.
    pub fn new() -> Self {
        Self
    }

    /// The exact line `send` writes for `message`.
    pub fn render_line(message: &str) -> String {
        format!("Sending Email: {message}")
    }
}

impl Default for EmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) {
        debug!(channel = "email", "Dispatching message");
        println!("{}", Self::render_line(message));
    }
}
