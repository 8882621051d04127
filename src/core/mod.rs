//! Core rendering utilities for the cricket database CLI
//!
//! This module consolidates the text output helpers used across commands:
//! - `table`: Column-aligned plain text tables
//! - `chart`: Horizontal bar charts

pub mod chart;
pub mod table;

// Re-export commonly used items for convenience
pub use chart::bar_chart;
pub use table::Table;
