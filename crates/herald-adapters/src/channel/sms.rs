//! SMS delivery adapter.

use herald_core::application::ports::Notifier;
use tracing::debug;

/// Production SMS notifier writing to stdout.
#[derive(Debug, Clone, Copy)]
pub struct SmsNotifier;

impl SmsNotifier {
    /// Create a new SMS notifier.
    pub fn new() -> Self {
        Self
    }

    /// The exact line `send` writes for `message`.
    pub fn render_line(message: &str) -> String {
        format!("Sending SMS: {message}")
    }
}

impl Default for SmsNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for SmsNotifier {
    fn send(&self, message: &str) {
        debug!(channel = "sms", "Dispatching message");
        println!("{}", Self::render_line(message));
    }
}
