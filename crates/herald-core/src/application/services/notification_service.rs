//! Notification Service - main application orchestrator.
//!
//! This service coordinates the entire notification workflow:
//! 1. Format the message for the recipient
//! 2. Dispatch it through the injected notifier
//! 3. Record the event through the injected logger
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing).

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Logger, Notifier},
    domain::{CHANNEL_REGISTRY, MessageFormatter},
};

/// Information about a channel for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelInfo {
    pub name: String,
    pub description: String,
}

/// All channels the domain knows about, in registry order.
pub fn available_channels() -> Vec<ChannelInfo> {
    CHANNEL_REGISTRY
        .iter()
        .map(|def| ChannelInfo {
            name: def.name.to_string(),
            description: def.description.to_string(),
        })
        .collect()
}

/// Main notification service.
///
/// Owns one notifier and one logger for its entire lifetime. Both are fixed
/// at construction — there is no setter, no `Option`, and therefore no
/// half-wired service. Two service instances never share adapters.
pub struct NotificationService {
    notifier: Box<dyn Notifier>,
    logger: Box<dyn Logger>,
    formatter: MessageFormatter,
}

impl NotificationService {
    /// Create a new notification service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use herald_core::application::NotificationService;
    ///
    /// let service = NotificationService::new(
    ///     notifier, // impl Notifier
    ///     logger,   // impl Logger
    /// );
    /// ```
    pub fn new(notifier: Box<dyn Notifier>, logger: Box<dyn Logger>) -> Self {
        Self {
            notifier,
            logger,
            formatter: MessageFormatter::new(),
        }
    }

    /// Send one notification.
    ///
    /// This is the main use case — a single linear sequence with no
    /// branching: format, dispatch, record. The log entry is written
    /// unconditionally after dispatch; there is no delivery outcome to
    /// consult.
    #[instrument(skip_all, fields(recipient = %recipient.as_ref()))]
    pub fn send_notification(&self, recipient: impl AsRef<str>, content: impl AsRef<str>) {
        let recipient = recipient.as_ref();
        let content = content.as_ref();

        // 1. Format the message
        let message = self.formatter.format_message(recipient, content);
        debug!(length = message.len(), "Message formatted");

        // 2. Dispatch via the injected notifier
        self.notifier.send(&message);

        // 3. Record the event via the injected logger
        self.logger.log(&format!("Notification sent to {recipient}"));

        info!("Notification dispatched");
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::application::ports::output::{MockLogger, MockNotifier};

    #[test]
    fn send_notification_formats_then_dispatches_then_logs() {
        let mut seq = Sequence::new();
        let mut notifier = MockNotifier::new();
        let mut logger = MockLogger::new();

        notifier
            .expect_send()
            .with(eq("Dear John, Your order has been shipped!"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        logger
            .expect_log()
            .with(eq("Notification sent to John"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let service = NotificationService::new(Box::new(notifier), Box::new(logger));
        service.send_notification("John", "Your order has been shipped!");
    }

    #[test]
    fn send_notification_accepts_empty_inputs() {
        let mut notifier = MockNotifier::new();
        let mut logger = MockLogger::new();

        notifier
            .expect_send()
            .with(eq("Dear , "))
            .times(1)
            .return_const(());
        logger
            .expect_log()
            .with(eq("Notification sent to "))
            .times(1)
            .return_const(());

        let service = NotificationService::new(Box::new(notifier), Box::new(logger));
        service.send_notification("", "");
    }

    #[test]
    fn log_entry_uses_raw_recipient_not_formatted_message() {
        let mut notifier = MockNotifier::new();
        let mut logger = MockLogger::new();

        notifier.expect_send().times(1).return_const(());
        logger
            .expect_log()
            .with(eq("Notification sent to a,b"))
            .times(1)
            .return_const(());

        let service = NotificationService::new(Box::new(notifier), Box::new(logger));
        service.send_notification("a,b", "content");
    }

    #[test]
    fn each_send_dispatches_exactly_once() {
        let mut notifier = MockNotifier::new();
        let mut logger = MockLogger::new();

        notifier.expect_send().times(2).return_const(());
        logger.expect_log().times(2).return_const(());

        let service = NotificationService::new(Box::new(notifier), Box::new(logger));
        service.send_notification("John", "first");
        service.send_notification("John", "second");
    }

    #[test]
    fn available_channels_lists_registry_in_order() {
        let channels = available_channels();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, "email");
        assert_eq!(channels[1].name, "sms");
        assert!(!channels[0].description.is_empty());
    }
}
