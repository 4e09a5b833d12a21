// Adapters layer: concrete implementations of the filesystem port.

pub mod memory;
pub mod storage;

pub use memory::MemoryFilesystem;
pub use storage::LocalFilesystem;
