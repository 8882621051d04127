//! Type-safe wrappers and enums for cricket records.

pub mod date;
pub mod ids;
pub mod role;
