//! Batting and bowling figures
//!
//! Figures can only be added and listed. Rates are computed once, when the
//! row is inserted.

use super::{
    metrics::{economy_rate, strike_rate},
    models::{BattingInput, BattingRow, BowlingInput, BowlingRow, Outcome},
    schema::{insert_outcome, CricketDatabase},
};
use crate::{error::Result, MatchId, PlayerId};
use rusqlite::params;

impl CricketDatabase {
    /// Record a player's innings in a match
    pub fn create_batting_stat(&mut self, stat: &BattingInput) -> Result<Outcome> {
        let rate = strike_rate(stat.runs, stat.balls_faced);
        let inserted = self.conn.execute(
            "INSERT INTO BattingStats
             (PlayerID, MatchID, Runs, BallsFaced, Fours, Sixes, StrikeRate)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                stat.player_id.as_u32(),
                stat.match_id.as_u32(),
                stat.runs,
                stat.balls_faced,
                stat.fours,
                stat.sixes,
                rate
            ],
        );
        insert_outcome(
            inserted,
            "Batting stats added successfully!",
            "Batting stats already exist for this player and match!",
        )
    }

    /// Get all batting figures in the order they were recorded
    pub fn read_batting_stats(&self) -> Result<Vec<BattingRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.PlayerID, b.MatchID, b.Runs, b.BallsFaced, b.Fours, b.Sixes, b.StrikeRate,
                    p.FirstName || ' ' || p.LastName AS PlayerName
             FROM BattingStats b
             LEFT JOIN Players p ON b.PlayerID = p.PlayerID
             ORDER BY b.rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(BattingRow {
                player_id: PlayerId::new(row.get(0)?),
                match_id: MatchId::new(row.get(1)?),
                runs: row.get(2)?,
                balls_faced: row.get(3)?,
                fours: row.get(4)?,
                sixes: row.get(5)?,
                strike_rate: row.get::<_, Option<f64>>(6)?.unwrap_or_default(),
                player_name: row.get(7)?,
            })
        })?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }

    /// Record a player's bowling spell in a match
    pub fn create_bowling_stat(&mut self, stat: &BowlingInput) -> Result<Outcome> {
        let rate = economy_rate(stat.runs_conceded, stat.overs);
        let inserted = self.conn.execute(
            "INSERT INTO BowlingStats
             (PlayerID, MatchID, Overs, Maidens, RunsConceded, Wickets, EconomyRate)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                stat.player_id.as_u32(),
                stat.match_id.as_u32(),
                stat.overs,
                stat.maidens,
                stat.runs_conceded,
                stat.wickets,
                rate
            ],
        );
        insert_outcome(
            inserted,
            "Bowling stats added successfully!",
            "Bowling stats already exist for this player and match!",
        )
    }

    /// Get all bowling figures in the order they were recorded
    pub fn read_bowling_stats(&self) -> Result<Vec<BowlingRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.PlayerID, b.MatchID, b.Overs, b.Maidens, b.RunsConceded, b.Wickets,
                    b.EconomyRate, p.FirstName || ' ' || p.LastName AS PlayerName
             FROM BowlingStats b
             LEFT JOIN Players p ON b.PlayerID = p.PlayerID
             ORDER BY b.rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(BowlingRow {
                player_id: PlayerId::new(row.get(0)?),
                match_id: MatchId::new(row.get(1)?),
                overs: row.get(2)?,
                maidens: row.get(3)?,
                runs_conceded: row.get(4)?,
                wickets: row.get(5)?,
                economy_rate: row.get::<_, Option<f64>>(6)?.unwrap_or_default(),
                player_name: row.get(7)?,
            })
        })?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }
}
