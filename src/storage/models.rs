//! Data models for the storage layer

use crate::cli::types::{
    ids::{MatchId, PlayerId, TeamId},
    role::Role,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A team as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub coach_name: String,
}

/// A player as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub role: Role,
    pub team_id: Option<TeamId>, // Not checked against Teams
}

/// A player joined with the name of their team, if it exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    #[serde(flatten)]
    pub player: Player,
    pub team_name: Option<String>,
}

/// A fixture between two teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: MatchId,
    pub date: NaiveDate,
    pub venue: String,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
}

/// A fixture with both team names looked up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub match_id: MatchId,
    pub date: NaiveDate,
    pub venue: String,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub team1: Option<String>,
    pub team2: Option<String>,
}

/// Raw batting figures for one player in one match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattingInput {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
}

/// Stored batting figures, including the strike rate computed at insert time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingRow {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
    pub player_name: Option<String>,
}

/// Raw bowling figures for one player in one match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BowlingInput {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub overs: f64,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
}

/// Stored bowling figures, including the economy rate computed at insert time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlingRow {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub overs: f64,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub economy_rate: f64,
    pub player_name: Option<String>,
}

/// Result of a create operation, shown to the user as a notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Outcome::Success(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(m) | Outcome::Failure(m) => m,
        }
    }
}
