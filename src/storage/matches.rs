//! Match records

use super::{
    models::{Match, MatchRow, Outcome},
    schema::{insert_outcome, CricketDatabase},
};
use crate::{error::Result, MatchId, TeamId};
use rusqlite::params;

impl CricketDatabase {
    /// Insert a new match between two teams
    pub fn create_match(&mut self, fixture: &Match) -> Result<Outcome> {
        let inserted = self.conn.execute(
            "INSERT INTO Matches (MatchID, MatchDate, Venue, Team1ID, Team2ID)
             VALUES (?, ?, ?, ?, ?)",
            params![
                fixture.match_id.as_u32(),
                fixture.date,
                fixture.venue,
                fixture.team1_id.as_u32(),
                fixture.team2_id.as_u32()
            ],
        );
        insert_outcome(
            inserted,
            "Match added successfully!",
            "Match ID already exists!",
        )
    }

    /// Get all matches in ID order. Team names are `None` for unknown team IDs.
    pub fn read_matches(&self) -> Result<Vec<MatchRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.MatchID, m.MatchDate, m.Venue, m.Team1ID, m.Team2ID,
                    t1.TeamName AS Team1, t2.TeamName AS Team2
             FROM Matches m
             LEFT JOIN Teams t1 ON m.Team1ID = t1.TeamID
             LEFT JOIN Teams t2 ON m.Team2ID = t2.TeamID
             ORDER BY m.MatchID",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(MatchRow {
                match_id: MatchId::new(row.get(0)?),
                date: row.get(1)?,
                venue: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                team1_id: TeamId::new(row.get(3)?),
                team2_id: TeamId::new(row.get(4)?),
                team1: row.get(5)?,
                team2: row.get(6)?,
            })
        })?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }

    /// Overwrite date, venue and both teams. Returns false when no match has that ID.
    pub fn update_match(&mut self, fixture: &Match) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE Matches
             SET MatchDate = ?, Venue = ?, Team1ID = ?, Team2ID = ?
             WHERE MatchID = ?",
            params![
                fixture.date,
                fixture.venue,
                fixture.team1_id.as_u32(),
                fixture.team2_id.as_u32(),
                fixture.match_id.as_u32()
            ],
        )?;
        log::debug!(
            "Updated match {}: {} row(s)",
            fixture.match_id,
            rows_affected
        );
        Ok(rows_affected > 0)
    }

    /// Delete a match
    pub fn delete_match(&mut self, match_id: MatchId) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM Matches WHERE MatchID = ?",
            params![match_id.as_u32()],
        )?;
        log::debug!("Deleted match {}: {} row(s)", match_id, rows_affected);
        Ok(rows_affected > 0)
    }
}
