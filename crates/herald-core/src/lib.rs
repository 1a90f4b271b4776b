//! Herald Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Herald
//! notification tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           herald-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │         (NotificationService)           │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: Notifier, Logger)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     herald-adapters (Infrastructure)    │
//! │  (EmailNotifier, SmsNotifier, Console)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │      (MessageFormatter, Channel)        │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use herald_core::application::NotificationService;
//!
//! // 1. Build the service with injected adapters
//! let service = NotificationService::new(
//!     notifier, // Box<dyn Notifier> - email, sms, ...
//!     logger,   // Box<dyn Logger>
//! );
//!
//! // 2. Dispatch one notification
//! service.send_notification("John", "Your order has been shipped!");
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ChannelInfo, NotificationService, available_channels,
        ports::{Logger, Notifier},
    };
    pub use crate::domain::{Channel, ChannelDef, MessageFormatter, UnknownChannelError};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
