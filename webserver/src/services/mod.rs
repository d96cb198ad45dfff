//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod sqlite_store;

// Re-export service implementations
pub use sqlite_store::SqliteClimateStore;
