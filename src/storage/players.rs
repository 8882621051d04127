//! Player records

use super::{
    models::{Outcome, Player, PlayerRow},
    schema::{insert_outcome, CricketDatabase},
};
use crate::{error::Result, PlayerId, TeamId};
use rusqlite::{params, Row};

impl CricketDatabase {
    /// Insert a new player. The team ID is stored without checking it exists.
    pub fn create_player(&mut self, player: &Player) -> Result<Outcome> {
        let inserted = self.conn.execute(
            "INSERT INTO Players (PlayerID, FirstName, LastName, DOB, Role, TeamID)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                player.player_id.as_u32(),
                player.first_name,
                player.last_name,
                player.dob,
                player.role,
                player.team_id.map(|t| t.as_u32())
            ],
        );
        insert_outcome(
            inserted,
            "Player added successfully!",
            "Player ID already exists!",
        )
    }

    /// Get all players in ID order, with their team's name when it resolves
    pub fn read_players(&self) -> Result<Vec<PlayerRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.PlayerID, p.FirstName, p.LastName, p.DOB, p.Role, p.TeamID, t.TeamName
             FROM Players p
             LEFT JOIN Teams t ON p.TeamID = t.TeamID
             ORDER BY p.PlayerID",
        )?;

        let rows = stmt.query_map([], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Overwrite every field but the ID. Returns false when no player has that ID.
    pub fn update_player(&mut self, player: &Player) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE Players
             SET FirstName = ?, LastName = ?, DOB = ?, Role = ?, TeamID = ?
             WHERE PlayerID = ?",
            params![
                player.first_name,
                player.last_name,
                player.dob,
                player.role,
                player.team_id.map(|t| t.as_u32()),
                player.player_id.as_u32()
            ],
        )?;
        log::debug!(
            "Updated player {}: {} row(s)",
            player.player_id,
            rows_affected
        );
        Ok(rows_affected > 0)
    }

    /// Delete a player. Their batting and bowling figures are kept.
    pub fn delete_player(&mut self, player_id: PlayerId) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM Players WHERE PlayerID = ?",
            params![player_id.as_u32()],
        )?;
        log::debug!("Deleted player {}: {} row(s)", player_id, rows_affected);
        Ok(rows_affected > 0)
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<PlayerRow> {
    Ok(PlayerRow {
        player: Player {
            player_id: PlayerId::new(row.get(0)?),
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            dob: row.get(3)?,
            role: row.get(4)?,
            team_id: row.get::<_, Option<u32>>(5)?.map(TeamId::new),
        },
        team_name: row.get(6)?,
    })
}
