//! Delivery channel adapters.

mod email;
mod memory;
mod sms;

pub use email::EmailNotifier;
pub use memory::MemoryNotifier;
pub use sms::SmsNotifier;
