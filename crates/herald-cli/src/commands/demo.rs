//! Implementation of the `herald demo` command.
//!
//! Runs the two canonical scenarios: the same service type wired once with
//! the email notifier and once with the SMS notifier, each sending a single
//! fixed notification. Swapping the injected notifier is the whole
//! demonstration — the service code is identical in both runs.

use tracing::instrument;

use herald_adapters::{ConsoleLogger, EmailNotifier, SmsNotifier};
use herald_core::application::NotificationService;

use crate::error::CliResult;

/// Execute the `herald demo` command.
#[instrument(skip_all)]
pub fn execute() -> CliResult<()> {
    // Scenario 1: email delivery
    let service = NotificationService::new(
        Box::new(EmailNotifier::new()),
        Box::new(ConsoleLogger::new()),
    );
    service.send_notification("John", "Your order has been shipped!");

    // Scenario 2: SMS delivery — same logger, different notifier
    let service = NotificationService::new(
        Box::new(SmsNotifier::new()),
        Box::new(ConsoleLogger::new()),
    );
    service.send_notification("Alice", "Your appointment is confirmed!");

    Ok(())
}
