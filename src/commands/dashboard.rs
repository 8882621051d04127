//! Dashboard command implementation

use super::{
    batting::batting_table,
    bowling::bowling_table,
    common::{print_json, rate},
    matches::matches_table,
    players::players_table,
    teams::teams_table,
};
use crate::{
    core::{chart::DEFAULT_BAR_WIDTH, bar_chart, Table},
    error::Result,
    storage::{analysis::Dashboard, CricketDatabase},
    PlayerId,
};
use std::fmt::Write as _;

/// Handle the dashboard command
pub fn handle_dashboard(db: &CricketDatabase, as_json: bool) -> Result<bool> {
    let dashboard = db.dashboard()?;
    if as_json {
        print_json(&dashboard)?;
    } else {
        print!("{}", render_dashboard(&dashboard));
    }
    Ok(true)
}

/// Label for a player in top-performer views; unknown players show their ID
fn player_label(name: Option<&str>, player_id: PlayerId) -> String {
    match name {
        Some(name) => name.to_string(),
        None => format!("Player {}", player_id),
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {} ==", title);
}

/// Render the whole dashboard as text
pub fn render_dashboard(d: &Dashboard) -> String {
    let mut out = String::from("Cricket Database Dashboard\n");

    section(&mut out, "Teams");
    out.push_str(&teams_table(&d.teams).to_string());
    let _ = writeln!(out, "Total Teams: {}", d.total_teams);

    section(&mut out, "Players");
    out.push_str(&players_table(&d.players).to_string());
    let _ = writeln!(out, "Total Players: {}", d.total_players);
    if !d.role_distribution.is_empty() {
        let entries: Vec<(String, f64)> = d
            .role_distribution
            .iter()
            .map(|rc| (rc.role.to_string(), rc.count as f64))
            .collect();
        out.push_str("\nPlayers by Role\n");
        out.push_str(&bar_chart(&entries, DEFAULT_BAR_WIDTH));
    }

    section(&mut out, "Matches");
    out.push_str(&matches_table(&d.matches).to_string());
    let _ = writeln!(out, "Total Matches: {}", d.total_matches);

    section(&mut out, "Batting Statistics");
    out.push_str(&batting_table(&d.batting).to_string());
    if !d.top_scorers.is_empty() {
        let mut table =
            Table::new(["PlayerName", "Runs", "StrikeRate"]).numeric(["Runs", "StrikeRate"]);
        let mut entries = Vec::new();
        for t in &d.top_scorers {
            let label = player_label(t.player_name.as_deref(), t.player_id);
            table.push_row([label.clone(), t.runs.to_string(), rate(t.strike_rate)]);
            entries.push((label, f64::from(t.runs)));
        }
        out.push_str("\nTop 5 Run Scorers\n");
        out.push_str(&table.to_string());
        out.push('\n');
        out.push_str(&bar_chart(&entries, DEFAULT_BAR_WIDTH));
    }

    section(&mut out, "Bowling Statistics");
    out.push_str(&bowling_table(&d.bowling).to_string());
    if !d.top_wicket_takers.is_empty() {
        let mut table = Table::new(["PlayerName", "Wickets", "EconomyRate"])
            .numeric(["Wickets", "EconomyRate"]);
        let mut entries = Vec::new();
        for t in &d.top_wicket_takers {
            let label = player_label(t.player_name.as_deref(), t.player_id);
            table.push_row([label.clone(), t.wickets.to_string(), rate(t.economy_rate)]);
            entries.push((label, f64::from(t.wickets)));
        }
        out.push_str("\nTop 5 Wicket Takers\n");
        out.push_str(&table.to_string());
        out.push('\n');
        out.push_str(&bar_chart(&entries, DEFAULT_BAR_WIDTH));
    }

    out
}
