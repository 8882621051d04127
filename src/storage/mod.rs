//! Storage layer for the cricket database
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `teams`, `players`, `matches`: Create/read/update/delete per entity
//! - `stats`: Batting and bowling figures (create and read only)
//! - `metrics`: Strike rate and economy rate
//! - `analysis`: Dashboard aggregates (totals, role mix, top performers)

pub mod analysis;
pub mod matches;
pub mod metrics;
pub mod models;
pub mod players;
pub mod schema;
pub mod stats;
pub mod teams;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::CricketDatabase;
