//! Batting figures command implementation

use super::common::{print_json, rate, report};
use crate::{
    cli::{BattingCmd, BattingFields},
    core::{table::cell, Table},
    error::Result,
    storage::{BattingInput, BattingRow, CricketDatabase},
};

impl From<BattingFields> for BattingInput {
    fn from(fields: BattingFields) -> Self {
        BattingInput {
            player_id: fields.player_id,
            match_id: fields.match_id,
            runs: fields.runs,
            balls_faced: fields.balls_faced,
            fours: fields.fours,
            sixes: fields.sixes,
        }
    }
}

/// Handle the batting command
pub fn handle_batting(db: &mut CricketDatabase, cmd: BattingCmd) -> Result<bool> {
    match cmd {
        BattingCmd::Create(fields) => Ok(report(&db.create_batting_stat(&fields.into())?)),
        BattingCmd::Read(args) => {
            let stats = db.read_batting_stats()?;
            if args.json {
                print_json(&stats)?;
            } else {
                print!("{}", batting_table(&stats));
            }
            Ok(true)
        }
    }
}

pub fn batting_table(stats: &[BattingRow]) -> Table {
    let mut table = Table::new([
        "PlayerID",
        "MatchID",
        "Runs",
        "BallsFaced",
        "Fours",
        "Sixes",
        "StrikeRate",
        "PlayerName",
    ])
    .numeric([
        "PlayerID",
        "MatchID",
        "Runs",
        "BallsFaced",
        "Fours",
        "Sixes",
        "StrikeRate",
    ]);
    for s in stats {
        table.push_row([
            s.player_id.to_string(),
            s.match_id.to_string(),
            s.runs.to_string(),
            s.balls_faced.to_string(),
            s.fours.to_string(),
            s.sixes.to_string(),
            rate(s.strike_rate),
            cell(s.player_name.as_deref()),
        ]);
    }
    table
}
