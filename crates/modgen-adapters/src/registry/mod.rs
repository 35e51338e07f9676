//! Registry adapters.

mod json;
mod memory;

pub use json::JsonRegistry;
pub use memory::MemoryRegistry;
