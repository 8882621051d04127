//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{
    date::{default_birth_date, parse_date},
    ids::{MatchId, PlayerId, TeamId},
    role::Role,
};

/// Parse a non-negative number of overs, e.g. `3.4`.
fn parse_overs(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(overs) if overs >= 0.0 && overs.is_finite() => Ok(overs),
        _ => Err(format!("invalid overs: {} (expected a number of at least 0)", s)),
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "cricket-db",
    about = "Cricket team, player and match statistics"
)]
pub struct Cricket {
    /// Database file (or set `CRICKET_DB_PATH` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every table with totals, role mix and top performers
    Dashboard {
        /// Output the dashboard as JSON instead of tables.
        #[clap(long)]
        json: bool,
    },

    /// Manage teams
    Teams {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage players
    Players {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Manage matches
    Matches {
        #[clap(subcommand)]
        cmd: MatchCmd,
    },

    /// Add or list batting figures
    Batting {
        #[clap(subcommand)]
        cmd: BattingCmd,
    },

    /// Add or list bowling figures
    Bowling {
        #[clap(subcommand)]
        cmd: BowlingCmd,
    },
}

/// Arguments shared by every `read` operation
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Output results as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

/// Arguments shared by every `delete` operation
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the record to delete.
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub id: u32,

    /// Confirm the deletion.
    #[clap(long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct TeamFields {
    /// Team ID.
    #[clap(long)]
    pub id: TeamId,

    /// Team name.
    #[clap(long)]
    pub name: String,

    /// Coach name.
    #[clap(long, default_value = "")]
    pub coach: String,
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Add a team
    Create(TeamFields),
    /// List all teams
    Read(ReadArgs),
    /// Replace a team's name and coach
    Update(TeamFields),
    /// Remove a team (players and matches keep their reference)
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct PlayerFields {
    /// Player ID.
    #[clap(long)]
    pub id: PlayerId,

    /// First name.
    #[clap(long)]
    pub first_name: String,

    /// Last name.
    #[clap(long)]
    pub last_name: String,

    /// Date of birth (YYYY-MM-DD).
    #[clap(long, value_parser = parse_date, default_value_t = default_birth_date())]
    pub dob: NaiveDate,

    /// Batsman | Bowler | All-Rounder | Wicket-Keeper
    #[clap(long)]
    pub role: Role,

    /// ID of the player's team.
    #[clap(long)]
    pub team_id: Option<TeamId>,
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Add a player
    Create(PlayerFields),
    /// List all players with their team names
    Read(ReadArgs),
    /// Replace every field of a player
    Update(PlayerFields),
    /// Remove a player
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct MatchFields {
    /// Match ID.
    #[clap(long)]
    pub id: MatchId,

    /// Match date (YYYY-MM-DD), defaults to today.
    #[clap(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Ground the match is played at.
    #[clap(long, default_value = "")]
    pub venue: String,

    /// ID of the first team.
    #[clap(long)]
    pub team1_id: TeamId,

    /// ID of the second team.
    #[clap(long)]
    pub team2_id: TeamId,
}

#[derive(Debug, Subcommand)]
pub enum MatchCmd {
    /// Add a match
    Create(MatchFields),
    /// List all matches with both team names
    Read(ReadArgs),
    /// Replace a match's date, venue and teams
    Update(MatchFields),
    /// Remove a match
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct BattingFields {
    /// Batter's player ID.
    #[clap(long)]
    pub player_id: PlayerId,

    /// Match ID.
    #[clap(long)]
    pub match_id: MatchId,

    #[clap(long, default_value_t = 0)]
    pub runs: u32,

    #[clap(long, default_value_t = 0)]
    pub balls_faced: u32,

    #[clap(long, default_value_t = 0)]
    pub fours: u32,

    #[clap(long, default_value_t = 0)]
    pub sixes: u32,
}

#[derive(Debug, Subcommand)]
pub enum BattingCmd {
    /// Record an innings; the strike rate is computed on insert
    Create(BattingFields),
    /// List all innings
    Read(ReadArgs),
}

#[derive(Debug, Args)]
pub struct BowlingFields {
    /// Bowler's player ID.
    #[clap(long)]
    pub player_id: PlayerId,

    /// Match ID.
    #[clap(long)]
    pub match_id: MatchId,

    /// Overs bowled, e.g. `3.4`.
    #[clap(long, value_parser = parse_overs, default_value = "0")]
    pub overs: f64,

    #[clap(long, default_value_t = 0)]
    pub maidens: u32,

    #[clap(long, default_value_t = 0)]
    pub runs_conceded: u32,

    #[clap(long, default_value_t = 0)]
    pub wickets: u32,
}

#[derive(Debug, Subcommand)]
pub enum BowlingCmd {
    /// Record a spell; the economy rate is computed on insert
    Create(BowlingFields),
    /// List all spells
    Read(ReadArgs),
}
