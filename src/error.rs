//! Error types for the cricket database

use thiserror::Error;


pub type Result<T> = std::result::Result<T, CricketError>;

#[derive(Error, Debug)]
pub enum CricketError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid role: {role} (expected Batsman, Bowler, All-Rounder or Wicket-Keeper)")]
    InvalidRole { role: String },

    #[error("Invalid date: {value} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("Invalid ID: {value} (expected a whole number of at least 1)")]
    InvalidId { value: String },

    #[error("Could not determine data directory; set {env_var} or pass --db")]
    MissingDataDir { env_var: String },
}

/// Whether a storage error is a primary key or unique index collision.
///
/// NOT NULL, CHECK and foreign key failures share the `SQLITE_CONSTRAINT`
/// primary code, so only the extended codes are matched.
pub fn is_duplicate_key(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
