//! Template repository adapters.

mod fs;
mod memory;

pub use fs::FsTemplateRepository;
pub use memory::InMemoryTemplateRepository;
