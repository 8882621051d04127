//! Players command implementation

use super::common::{change_outcome, print_json, report, unconfirmed_delete};
use crate::{
    cli::{PlayerCmd, PlayerFields},
    core::{table::cell, Table},
    error::Result,
    storage::{CricketDatabase, Player, PlayerRow},
    PlayerId,
};

impl From<PlayerFields> for Player {
    fn from(fields: PlayerFields) -> Self {
        Player {
            player_id: fields.id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            dob: fields.dob,
            role: fields.role,
            team_id: fields.team_id,
        }
    }
}

/// Handle the players command
pub fn handle_players(db: &mut CricketDatabase, cmd: PlayerCmd) -> Result<bool> {
    match cmd {
        PlayerCmd::Create(fields) => Ok(report(&db.create_player(&fields.into())?)),
        PlayerCmd::Read(args) => {
            let players = db.read_players()?;
            if args.json {
                print_json(&players)?;
            } else {
                print!("{}", players_table(&players));
            }
            Ok(true)
        }
        PlayerCmd::Update(fields) => {
            let found = db.update_player(&fields.into())?;
            Ok(report(&change_outcome(found, "Player", "updated")))
        }
        PlayerCmd::Delete(args) => {
            if !args.yes {
                return Ok(report(&unconfirmed_delete("Player", args.id)));
            }
            let found = db.delete_player(PlayerId::new(args.id))?;
            Ok(report(&change_outcome(found, "Player", "deleted")))
        }
    }
}

pub fn players_table(players: &[PlayerRow]) -> Table {
    let mut table = Table::new([
        "PlayerID",
        "FirstName",
        "LastName",
        "DOB",
        "Role",
        "TeamID",
        "TeamName",
    ])
    .numeric(["PlayerID", "TeamID"]);
    for row in players {
        let p = &row.player;
        table.push_row([
            p.player_id.to_string(),
            p.first_name.clone(),
            p.last_name.clone(),
            p.dob.to_string(),
            p.role.to_string(),
            cell(p.team_id),
            cell(row.team_name.as_deref()),
        ]);
    }
    table
}
