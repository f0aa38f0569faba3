//! Selector level implementations that need no terminal.

mod memory;

pub use memory::MemoryLevel;
