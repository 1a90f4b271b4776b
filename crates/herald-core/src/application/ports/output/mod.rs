//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `herald-adapters` crate provides implementations.
//!
//! Both operations are infallible on purpose: the output sink is treated as
//! always available, and a dispatched notification has no delivery receipt
//! to inspect. Nothing in the application layer branches on the outcome of
//! a send or a log call.

#[cfg(test)]
use mockall::automock;

/// Port for dispatching a message through a delivery channel.
///
/// Implemented by:
/// - `herald_adapters::channel::EmailNotifier` (production)
/// - `herald_adapters::channel::SmsNotifier` (production)
/// - `herald_adapters::channel::MemoryNotifier` (testing)
///
/// ## Design Notes
///
/// - Any implementation must be usable wherever the trait is expected:
///   identical signature, no additional preconditions on `message`
/// - Implementations are stateless from the caller's point of view; a
///   notifier is owned by exactly one service instance
#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    /// Dispatch a fully-formatted message.
    ///
    /// Accepts any text, including the empty string.
    fn send(&self, message: &str);
}

/// Port for recording an event description.
///
/// Implemented by:
/// - `herald_adapters::log::ConsoleLogger` (production)
/// - `herald_adapters::log::MemoryLogger` (testing)
#[cfg_attr(test, automock)]
pub trait Logger: Send + Sync {
    /// Record one event description.
    fn log(&self, info: &str);
}
