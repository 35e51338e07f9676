//! Template stores.

mod filesystem;
mod memory;

pub use filesystem::FsTemplateStore;
pub use memory::MemoryTemplateStore;
