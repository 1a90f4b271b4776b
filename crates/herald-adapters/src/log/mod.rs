//! Event log adapters.

mod console;
mod memory;

pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
