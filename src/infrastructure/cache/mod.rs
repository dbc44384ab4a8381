//! Cache infrastructure - store implementations

mod file_store;
mod in_memory;

pub use file_store::JsonFileStore;
pub use in_memory::InMemoryStore;
