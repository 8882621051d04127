//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use cricket_db::{
    cli::{Commands, Cricket},
    commands::{
        batting::handle_batting, bowling::handle_bowling, dashboard::handle_dashboard,
        matches::handle_matches, players::handle_players, teams::handle_teams,
    },
    config::resolve_database_path,
    CricketDatabase,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = Cricket::parse();

    let db_path = resolve_database_path(app.db)?;
    let mut db = CricketDatabase::open(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let succeeded = match app.command {
        Commands::Dashboard { json } => handle_dashboard(&db, json)?,
        Commands::Teams { cmd } => handle_teams(&mut db, cmd)?,
        Commands::Players { cmd } => handle_players(&mut db, cmd)?,
        Commands::Matches { cmd } => handle_matches(&mut db, cmd)?,
        Commands::Batting { cmd } => handle_batting(&mut db, cmd)?,
        Commands::Bowling { cmd } => handle_bowling(&mut db, cmd)?,
    };

    // Failure notices are not errors, but scripts should still see them
    if !succeeded {
        drop(db);
        std::process::exit(1);
    }

    Ok(())
}
