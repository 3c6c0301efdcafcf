//! Utility modules for the ouvrage viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_money, format_percent, format_quantity, get_current_memory_mb, format_memory_mb};
