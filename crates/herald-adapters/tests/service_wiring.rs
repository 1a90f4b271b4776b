//! Integration tests: NotificationService wired with real adapters.

use herald_adapters::{MemoryLogger, MemoryNotifier};
use herald_core::application::NotificationService;

#[test]
fn full_notification_workflow() {
    // Setup adapters (keep handles; the service owns clones of the buffers)
    let notifier = MemoryNotifier::new();
    let logger = MemoryLogger::new();

    // Create service
    let service = NotificationService::new(Box::new(notifier.clone()), Box::new(logger.clone()));

    // Send
    service.send_notification("John", "Your order has been shipped!");

    // Verify
    assert_eq!(notifier.sent(), vec!["Dear John, Your order has been shipped!"]);
    assert_eq!(logger.records(), vec!["Notification sent to John"]);
}

#[test]
fn swapping_the_notifier_leaves_logger_output_unchanged() {
    // Two services, different notifier instances, same logger wiring — the
    // log trail must not depend on which notifier was injected.
    let first_notifier = MemoryNotifier::new();
    let first_logger = MemoryLogger::new();
    let first = NotificationService::new(
        Box::new(first_notifier.clone()),
        Box::new(first_logger.clone()),
    );

    let second_notifier = MemoryNotifier::new();
    let second_logger = MemoryLogger::new();
    let second = NotificationService::new(
        Box::new(second_notifier.clone()),
        Box::new(second_logger.clone()),
    );

    first.send_notification("Alice", "Your appointment is confirmed!");
    second.send_notification("Alice", "Your appointment is confirmed!");

    assert_eq!(first_logger.records(), second_logger.records());
    assert_eq!(first_notifier.sent(), second_notifier.sent());
}

#[test]
fn services_do_not_share_state() {
    let notifier_a = MemoryNotifier::new();
    let logger_a = MemoryLogger::new();
    let service_a =
        NotificationService::new(Box::new(notifier_a.clone()), Box::new(logger_a.clone()));

    let notifier_b = MemoryNotifier::new();
    let logger_b = MemoryLogger::new();
    let _service_b =
        NotificationService::new(Box::new(notifier_b.clone()), Box::new(logger_b.clone()));

    service_a.send_notification("John", "only for A");

    assert_eq!(notifier_a.sent().len(), 1);
    assert!(notifier_b.sent().is_empty());
    assert!(logger_b.records().is_empty());
}

#[test]
fn repeated_sends_accumulate_in_order() {
    let notifier = MemoryNotifier::new();
    let logger = MemoryLogger::new();
    let service = NotificationService::new(Box::new(notifier.clone()), Box::new(logger.clone()));

    service.send_notification("John", "first");
    service.send_notification("Jane", "second");

    assert_eq!(notifier.sent(), vec!["Dear John, first", "Dear Jane, second"]);
    assert_eq!(
        logger.records(),
        vec!["Notification sent to John", "Notification sent to Jane"]
    );
}
