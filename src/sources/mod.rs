//! Raw source loader implementations.

mod file;
mod memory;
mod source_loader;

pub use file::FileLoader;
pub use memory::StaticLoader;
pub use source_loader::SourceLoader;
