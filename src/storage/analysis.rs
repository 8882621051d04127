//! Dashboard aggregates computed from full table reads

use super::{models::*, schema::CricketDatabase};
use crate::{cli::types::role::Role, error::Result, PlayerId};
use serde::Serialize;

/// How many entries the top-performer views keep
pub const TOP_N: usize = 5;

/// Number of players holding a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: usize,
}

/// One line of the top run scorers view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopScorer {
    pub player_id: PlayerId,
    pub player_name: Option<String>,
    pub runs: u32,
    pub strike_rate: f64,
}

/// One line of the top wicket takers view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopWicketTaker {
    pub player_id: PlayerId,
    pub player_name: Option<String>,
    pub wickets: u32,
    pub economy_rate: f64,
}

/// Everything the dashboard shows, read in one pass over all five tables
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub teams: Vec<Team>,
    pub players: Vec<PlayerRow>,
    pub matches: Vec<MatchRow>,
    pub batting: Vec<BattingRow>,
    pub bowling: Vec<BowlingRow>,
    pub total_teams: usize,
    pub total_players: usize,
    pub total_matches: usize,
    pub role_distribution: Vec<RoleCount>,
    pub top_scorers: Vec<TopScorer>,
    pub top_wicket_takers: Vec<TopWicketTaker>,
}

impl CricketDatabase {
    /// Read every table and derive the dashboard aggregates
    pub fn dashboard(&self) -> Result<Dashboard> {
        let teams = self.read_teams()?;
        let players = self.read_players()?;
        let matches = self.read_matches()?;
        let batting = self.read_batting_stats()?;
        let bowling = self.read_bowling_stats()?;

        Ok(Dashboard {
            total_teams: teams.len(),
            total_players: players.len(),
            total_matches: matches.len(),
            role_distribution: role_distribution(&players),
            top_scorers: top_scorers(&batting, TOP_N),
            top_wicket_takers: top_wicket_takers(&bowling, TOP_N),
            teams,
            players,
            matches,
            batting,
            bowling,
        })
    }
}

/// Count players per role, most common first.
///
/// Roles with equal counts keep the order in which they first appear.
pub fn role_distribution(players: &[PlayerRow]) -> Vec<RoleCount> {
    let mut counts: Vec<RoleCount> = Vec::new();
    for row in players {
        match counts.iter_mut().find(|c| c.role == row.player.role) {
            Some(entry) => entry.count += 1,
            None => counts.push(RoleCount {
                role: row.player.role,
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-appearance order for ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `limit` innings with the most runs, highest first.
///
/// Ties keep the order the rows were read in, which is insertion order.
pub fn top_scorers(batting: &[BattingRow], limit: usize) -> Vec<TopScorer> {
    let mut rows: Vec<&BattingRow> = batting.iter().collect();
    rows.sort_by(|a, b| b.runs.cmp(&a.runs));
    rows.into_iter()
        .take(limit)
        .map(|row| TopScorer {
            player_id: row.player_id,
            player_name: row.player_name.clone(),
            runs: row.runs,
            strike_rate: row.strike_rate,
        })
        .collect()
}

/// The `limit` spells with the most wickets, highest first.
///
/// Ties keep the order the rows were read in, which is insertion order.
pub fn top_wicket_takers(bowling: &[BowlingRow], limit: usize) -> Vec<TopWicketTaker> {
    let mut rows: Vec<&BowlingRow> = bowling.iter().collect();
    rows.sort_by(|a, b| b.wickets.cmp(&a.wickets));
    rows.into_iter()
        .take(limit)
        .map(|row| TopWicketTaker {
            player_id: row.player_id,
            player_name: row.player_name.clone(),
            wickets: row.wickets,
            economy_rate: row.economy_rate,
        })
        .collect()
}
