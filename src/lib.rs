//! Cricket Database Library
//!
//! Record keeping for cricket teams, players, matches and per-match batting
//! and bowling figures, stored in a local SQLite file.
//!
//! ## Features
//!
//! - **Teams, Players, Matches**: create, read, update and delete by ID
//! - **Batting and Bowling Figures**: add and list, with strike rate and
//!   economy rate computed when a row is added
//! - **Dashboard**: totals, role distribution, top 5 run scorers and wicket takers
//!
//! ## Quick Start
//!
//! ```rust
//! use cricket_db::{storage::*, Role, TeamId, PlayerId};
//! use chrono::NaiveDate;
//!
//! # fn example() -> cricket_db::Result<()> {
//! let mut db = CricketDatabase::open_in_memory()?;
//!
//! db.create_team(&Team {
//!     team_id: TeamId::new(1),
//!     name: "Mumbai".to_string(),
//!     coach_name: "Mahela".to_string(),
//! })?;
//!
//! let outcome = db.create_player(&Player {
//!     player_id: PlayerId::new(45),
//!     first_name: "Rohit".to_string(),
//!     last_name: "Sharma".to_string(),
//!     dob: NaiveDate::from_ymd_opt(1987, 4, 30).unwrap(),
//!     role: Role::Batsman,
//!     team_id: Some(TeamId::new(1)),
//! })?;
//! assert!(outcome.is_success());
//!
//! let players = db.read_players()?;
//! assert_eq!(players[0].team_name.as_deref(), Some("Mumbai"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export CRICKET_DB_PATH=$HOME/cricket.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::{MatchId, PlayerId, TeamId},
    role::Role,
};
pub use error::{CricketError, Result};
pub use storage::{CricketDatabase, Outcome};

pub const DB_PATH_ENV_VAR: &str = "CRICKET_DB_PATH";
