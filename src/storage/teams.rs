//! Team records

use super::{
    models::{Outcome, Team},
    schema::{insert_outcome, CricketDatabase},
};
use crate::{error::Result, TeamId};
use rusqlite::params;

impl CricketDatabase {
    /// Insert a new team. A taken ID yields a failure outcome, not an error.
    pub fn create_team(&mut self, team: &Team) -> Result<Outcome> {
        let inserted = self.conn.execute(
            "INSERT INTO Teams (TeamID, TeamName, CoachName) VALUES (?, ?, ?)",
            params![team.team_id.as_u32(), team.name, team.coach_name],
        );
        insert_outcome(inserted, "Team added successfully!", "Team ID already exists!")
    }

    /// Get all teams in ID order
    pub fn read_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT TeamID, TeamName, CoachName FROM Teams ORDER BY TeamID")?;

        let rows = stmt.query_map([], |row| {
            Ok(Team {
                team_id: TeamId::new(row.get(0)?),
                name: row.get(1)?,
                coach_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Overwrite name and coach. Returns false when no team has that ID.
    pub fn update_team(&mut self, team: &Team) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE Teams SET TeamName = ?, CoachName = ? WHERE TeamID = ?",
            params![team.name, team.coach_name, team.team_id.as_u32()],
        )?;
        log::debug!("Updated team {}: {} row(s)", team.team_id, rows_affected);
        Ok(rows_affected > 0)
    }

    /// Delete a team. Players and matches pointing at it are left as they are.
    pub fn delete_team(&mut self, team_id: TeamId) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM Teams WHERE TeamID = ?", params![team_id.as_u32()])?;
        log::debug!("Deleted team {}: {} row(s)", team_id, rows_affected);
        Ok(rows_affected > 0)
    }
}
