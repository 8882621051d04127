//! Database schema and connection management

use super::models::Outcome;
use crate::error::{is_duplicate_key, Result};
use rusqlite::Connection;
use std::path::Path;

/// Database handle owning a single SQLite connection.
///
/// Every repository operation issues exactly one statement in autocommit
/// mode; the connection closes when the handle is dropped.
pub struct CricketDatabase {
    pub(crate) conn: Connection,
}

impl CricketDatabase {
    /// Open (or create) the database file and ensure tables exist
    pub fn open(db_path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        log::debug!("Opening database at {}", db_path.display());
        let conn = Connection::open(db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open a throwaway in-memory database with the full schema
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema. A no-op when the tables already exist.
    ///
    /// Foreign keys are declared but not enforced: the bundled SQLite turns
    /// enforcement on by default, so it is switched off per connection.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.pragma_update(None, "foreign_keys", false)?;
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS Teams (
                TeamID INTEGER PRIMARY KEY,
                TeamName VARCHAR(100) NOT NULL,
                CoachName VARCHAR(100)
            );

            CREATE TABLE IF NOT EXISTS Players (
                PlayerID INTEGER PRIMARY KEY,
                FirstName VARCHAR(50) NOT NULL,
                LastName VARCHAR(50) NOT NULL,
                DOB DATE,
                Role VARCHAR(50),
                TeamID INTEGER,
                FOREIGN KEY (TeamID) REFERENCES Teams(TeamID)
            );

            CREATE TABLE IF NOT EXISTS Matches (
                MatchID INTEGER PRIMARY KEY,
                MatchDate DATE NOT NULL,
                Venue VARCHAR(100),
                Team1ID INTEGER,
                Team2ID INTEGER,
                FOREIGN KEY (Team1ID) REFERENCES Teams(TeamID),
                FOREIGN KEY (Team2ID) REFERENCES Teams(TeamID)
            );

            CREATE TABLE IF NOT EXISTS BattingStats (
                PlayerID INTEGER,
                MatchID INTEGER,
                Runs INTEGER DEFAULT 0,
                BallsFaced INTEGER DEFAULT 0,
                Fours INTEGER DEFAULT 0,
                Sixes INTEGER DEFAULT 0,
                StrikeRate FLOAT,
                PRIMARY KEY (PlayerID, MatchID),
                FOREIGN KEY (PlayerID) REFERENCES Players(PlayerID),
                FOREIGN KEY (MatchID) REFERENCES Matches(MatchID)
            );

            CREATE TABLE IF NOT EXISTS BowlingStats (
                PlayerID INTEGER,
                MatchID INTEGER,
                Overs FLOAT DEFAULT 0,
                Maidens INTEGER DEFAULT 0,
                RunsConceded INTEGER DEFAULT 0,
                Wickets INTEGER DEFAULT 0,
                EconomyRate FLOAT,
                PRIMARY KEY (PlayerID, MatchID),
                FOREIGN KEY (PlayerID) REFERENCES Players(PlayerID),
                FOREIGN KEY (MatchID) REFERENCES Matches(MatchID)
            );",
        )?;

        Ok(())
    }
}

/// Translate the result of a single INSERT into an [`Outcome`].
///
/// Key collisions become a failure outcome carrying `duplicate`; any other
/// storage error, including other constraint failures, is propagated.
pub(crate) fn insert_outcome(
    inserted: rusqlite::Result<usize>,
    added: &str,
    duplicate: &str,
) -> Result<Outcome> {
    match inserted {
        Ok(rows) => {
            log::debug!("Insert affected {} row(s)", rows);
            Ok(Outcome::success(added))
        }
        Err(e) if is_duplicate_key(&e) => {
            log::info!("Insert rejected: {}", e);
            Ok(Outcome::failure(duplicate))
        }
        Err(e) => Err(e.into()),
    }
}
