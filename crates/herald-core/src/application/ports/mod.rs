//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `herald-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Notifier`: message dispatch through a delivery channel
//!   - `Logger`: event recording
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Logger, Notifier};
