//! Persisted auth-state adapters.

mod file;
mod memory;

pub use file::FileAuthStore;
pub use memory::InMemoryAuthStore;
