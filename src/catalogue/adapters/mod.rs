//! Adapter implementations for the object-store port.

mod directory;
mod memory;

pub use directory::DirectoryObjectStore;
pub use memory::{InMemoryObjectStore, StoreOperation};
