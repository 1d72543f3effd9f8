pub mod api;
pub mod auth;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::GroupeaseError;
pub use crate::core::services::GroupPolicy;
pub use infrastructure::directory::in_memory::InMemoryDirectory;
pub use infrastructure::logging::in_memory::InMemoryLogging;
pub use infrastructure::storage::in_memory::InMemoryGroupStore;

#[cfg(test)]
mod tests;
