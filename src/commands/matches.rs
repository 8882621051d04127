//! Matches command implementation

use super::common::{change_outcome, print_json, report, unconfirmed_delete};
use crate::{
    cli::{types::date::today, MatchCmd, MatchFields},
    core::{table::cell, Table},
    error::Result,
    storage::{CricketDatabase, Match, MatchRow},
    MatchId,
};

impl From<MatchFields> for Match {
    fn from(fields: MatchFields) -> Self {
        Match {
            match_id: fields.id,
            date: fields.date.unwrap_or_else(today),
            venue: fields.venue,
            team1_id: fields.team1_id,
            team2_id: fields.team2_id,
        }
    }
}

/// Handle the matches command
pub fn handle_matches(db: &mut CricketDatabase, cmd: MatchCmd) -> Result<bool> {
    match cmd {
        MatchCmd::Create(fields) => Ok(report(&db.create_match(&fields.into())?)),
        MatchCmd::Read(args) => {
            let matches = db.read_matches()?;
            if args.json {
                print_json(&matches)?;
            } else {
                print!("{}", matches_table(&matches));
            }
            Ok(true)
        }
        MatchCmd::Update(fields) => {
            let found = db.update_match(&fields.into())?;
            Ok(report(&change_outcome(found, "Match", "updated")))
        }
        MatchCmd::Delete(args) => {
            if !args.yes {
                return Ok(report(&unconfirmed_delete("Match", args.id)));
            }
            let found = db.delete_match(MatchId::new(args.id))?;
            Ok(report(&change_outcome(found, "Match", "deleted")))
        }
    }
}

pub fn matches_table(matches: &[MatchRow]) -> Table {
    let mut table = Table::new(["MatchID", "MatchDate", "Venue", "Team1", "Team2"])
        .numeric(["MatchID"]);
    for m in matches {
        table.push_row([
            m.match_id.to_string(),
            m.date.to_string(),
            m.venue.clone(),
            cell(m.team1.as_deref()),
            cell(m.team2.as_deref()),
        ]);
    }
    table
}
