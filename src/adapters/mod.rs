// Adapters layer: concrete repository implementations backing the catalog port.

pub mod file;
pub mod memory;

pub use file::FileCatalog;
pub use memory::InMemoryCatalog;
