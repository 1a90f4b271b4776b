//! Application layer for Herald.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (NotificationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. The little business logic this system has lives
//! in `crate::domain`.

pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ChannelInfo, // DTO for channel metadata
    NotificationService,
    available_channels,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Logger, Notifier};
