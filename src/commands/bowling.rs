//! Bowling figures command implementation

use super::common::{print_json, rate, report};
use crate::{
    cli::{BowlingCmd, BowlingFields},
    core::{table::cell, Table},
    error::Result,
    storage::{BowlingInput, BowlingRow, CricketDatabase},
};

impl From<BowlingFields> for BowlingInput {
    fn from(fields: BowlingFields) -> Self {
        BowlingInput {
            player_id: fields.player_id,
            match_id: fields.match_id,
            overs: fields.overs,
            maidens: fields.maidens,
            runs_conceded: fields.runs_conceded,
            wickets: fields.wickets,
        }
    }
}

/// Handle the bowling command
pub fn handle_bowling(db: &mut CricketDatabase, cmd: BowlingCmd) -> Result<bool> {
    match cmd {
        BowlingCmd::Create(fields) => Ok(report(&db.create_bowling_stat(&fields.into())?)),
        BowlingCmd::Read(args) => {
            let stats = db.read_bowling_stats()?;
            if args.json {
                print_json(&stats)?;
            } else {
                print!("{}", bowling_table(&stats));
            }
            Ok(true)
        }
    }
}

pub fn bowling_table(stats: &[BowlingRow]) -> Table {
    let mut table = Table::new([
        "PlayerID",
        "MatchID",
        "Overs",
        "Maidens",
        "RunsConceded",
        "Wickets",
        "EconomyRate",
        "PlayerName",
    ])
    .numeric([
        "PlayerID",
        "MatchID",
        "Overs",
        "Maidens",
        "RunsConceded",
        "Wickets",
        "EconomyRate",
    ]);
    for s in stats {
        table.push_row([
            s.player_id.to_string(),
            s.match_id.to_string(),
            s.overs.to_string(),
            s.maidens.to_string(),
            s.runs_conceded.to_string(),
            s.wickets.to_string(),
            rate(s.economy_rate),
            cell(s.player_name.as_deref()),
        ]);
    }
    table
}
