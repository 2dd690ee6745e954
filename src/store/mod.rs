//! Persistence layer — configuration and onboarding-status stores.

pub mod libsql_backend;
pub mod memory;
pub mod traits;

pub use libsql_backend::LibSqlStatusStore;
pub use memory::MemoryConfigStore;
pub use traits::{ConfigurationStore, OnboardingStatusStore};
