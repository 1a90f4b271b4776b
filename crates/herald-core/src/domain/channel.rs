//! Notification channel registry.
//!
//! Each deliverable channel is described exactly once by its [`ChannelDef`]
//! entry; name parsing, display, and the `channels` listing all derive from
//! the registry. Adding a channel means adding one enum variant and one
//! registry entry — no `match` arms scattered across the workspace (the
//! adapter crate contributes the corresponding `Notifier` implementation).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A notification delivery channel.
///
/// Closed set: every variant has a [`ChannelDef`] entry in
/// [`CHANNEL_REGISTRY`] and a `Notifier` implementation in the adapters
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Email,
    Sms,
}

// ── Channel definitions ──────────────────────────────────────────────────────

/// Describes what the domain knows about one channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDef {
    /// The channel this definition describes.
    pub channel: Channel,

    /// Canonical name, as accepted on the command line and in config files.
    pub name: &'static str,

    /// Human-readable description for listings.
    pub description: &'static str,
}

/// Single source of truth for channel metadata.
pub static CHANNEL_REGISTRY: &[ChannelDef] = &[
    ChannelDef {
        channel: Channel::Email,
        name: "email",
        description: "Deliver the message to an email inbox",
    },
    ChannelDef {
        channel: Channel::Sms,
        name: "sms",
        description: "Deliver the message as a text message",
    },
];

impl Channel {
    /// Registry entry for this channel.
    pub fn def(&self) -> &'static ChannelDef {
        CHANNEL_REGISTRY
            .iter()
            .find(|d| d.channel == *self)
            .expect("every Channel variant has a registry entry")
    }

    /// Canonical name of this channel.
    pub fn name(&self) -> &'static str {
        self.def().name
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A channel name that matches no registry entry.
///
/// Only reachable from free-form sources (config files, environment); the
/// CLI's value enum rejects unknown names before this type is ever built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown channel '{name}', expected one of: {expected}")]
pub struct UnknownChannelError {
    /// The name that failed to parse.
    pub name: String,
    /// Comma-separated list of valid channel names.
    pub expected: String,
}

impl UnknownChannelError {
    fn new(name: impl Into<String>) -> Self {
        let expected = CHANNEL_REGISTRY
            .iter()
            .map(|d| d.name)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: name.into(),
            expected,
        }
    }
}

impl FromStr for Channel {
    type Err = UnknownChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CHANNEL_REGISTRY
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(s))
            .map(|d| d.channel)
            .ok_or_else(|| UnknownChannelError::new(s))
    }
}
