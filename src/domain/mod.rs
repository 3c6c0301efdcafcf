//! Domain logic modules for the ouvrage viewer.
//!
//! This module contains core business logic:
//! - Row filtering (which lines are visible given the expansion state)

pub mod row_filter;
