//! Core domain layer for Herald.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (dispatching to a channel, recording events) are handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No console, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
pub mod channel;
pub mod formatter;

// Re-exports for convenience
pub use channel::{CHANNEL_REGISTRY, Channel, ChannelDef, UnknownChannelError};
pub use formatter::MessageFormatter;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Formatter Tests
    // ========================================================================

    #[test]
    fn formatter_builds_greeting() {
        let formatter = MessageFormatter::new();
        assert_eq!(
            formatter.format_message("John", "Your order has been shipped!"),
            "Dear John, Your order has been shipped!"
        );
    }

    #[test]
    fn formatter_accepts_empty_inputs() {
        let formatter = MessageFormatter::new();
        assert_eq!(formatter.format_message("", ""), "Dear , ");
        assert_eq!(formatter.format_message("", "hello"), "Dear , hello");
        assert_eq!(formatter.format_message("Bob", ""), "Dear Bob, ");
    }

    #[test]
    fn formatter_does_not_escape_template_lookalikes() {
        let formatter = MessageFormatter::new();
        // Inputs containing the greeting's own tokens pass through untouched.
        assert_eq!(
            formatter.format_message("Dear", "Dear, Dear"),
            "Dear Dear, Dear, Dear"
        );
        assert_eq!(
            formatter.format_message("a,b", "c,d"),
            "Dear a,b, c,d"
        );
    }

    // ========================================================================
    // Channel Tests
    // ========================================================================

    #[test]
    fn channel_parses_registry_names() {
        assert_eq!(Channel::from_str("email").unwrap(), Channel::Email);
        assert_eq!(Channel::from_str("sms").unwrap(), Channel::Sms);
        assert!(Channel::from_str("pigeon").is_err());
    }

    #[test]
    fn channel_display_round_trips() {
        for def in CHANNEL_REGISTRY {
            assert_eq!(
                Channel::from_str(&def.channel.to_string()).unwrap(),
                def.channel
            );
        }
    }

    #[test]
    fn unknown_channel_error_names_candidates() {
        let err = Channel::from_str("carrier-pigeon").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("carrier-pigeon"));
        assert!(msg.contains("email"));
        assert!(msg.contains("sms"));
    }

    #[test]
    fn registry_covers_every_channel() {
        // Each enum variant must appear in the registry exactly once.
        assert_eq!(CHANNEL_REGISTRY.len(), 2);
        assert!(CHANNEL_REGISTRY.iter().any(|d| d.channel == Channel::Email));
        assert!(CHANNEL_REGISTRY.iter().any(|d| d.channel == Channel::Sms));
    }
}
