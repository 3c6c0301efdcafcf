//! Caching modules for derived row data.

pub mod row_cache;

// Re-export commonly used types
pub use row_cache::RowCache;
