//! Teams command implementation

use super::common::{change_outcome, print_json, report, unconfirmed_delete};
use crate::{
    cli::{TeamCmd, TeamFields},
    core::Table,
    error::Result,
    storage::{CricketDatabase, Team},
    TeamId,
};

impl From<TeamFields> for Team {
    fn from(fields: TeamFields) -> Self {
        Team {
            team_id: fields.id,
            name: fields.name,
            coach_name: fields.coach,
        }
    }
}

/// Handle the teams command
pub fn handle_teams(db: &mut CricketDatabase, cmd: TeamCmd) -> Result<bool> {
    match cmd {
        TeamCmd::Create(fields) => Ok(report(&db.create_team(&fields.into())?)),
        TeamCmd::Read(args) => {
            let teams = db.read_teams()?;
            if args.json {
                print_json(&teams)?;
            } else {
                print!("{}", teams_table(&teams));
            }
            Ok(true)
        }
        TeamCmd::Update(fields) => {
            let found = db.update_team(&fields.into())?;
            Ok(report(&change_outcome(found, "Team", "updated")))
        }
        TeamCmd::Delete(args) => {
            if !args.yes {
                return Ok(report(&unconfirmed_delete("Team", args.id)));
            }
            let found = db.delete_team(TeamId::new(args.id))?;
            Ok(report(&change_outcome(found, "Team", "deleted")))
        }
    }
}

pub fn teams_table(teams: &[Team]) -> Table {
    let mut table = Table::new(["TeamID", "TeamName", "CoachName"]).numeric(["TeamID"]);
    for team in teams {
        table.push_row([
            team.team_id.to_string(),
            team.name.clone(),
            team.coach_name.clone(),
        ]);
    }
    table
}
