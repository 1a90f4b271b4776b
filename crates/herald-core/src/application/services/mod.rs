//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "send a notification".

pub mod notification_service;

pub use notification_service::{ChannelInfo, NotificationService, available_channels};
