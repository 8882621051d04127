//! Integration tests for configuration and the command line surface

use clap::Parser;
use cricket_db::{
    cli::{Commands, Cricket, TeamCmd},
    commands::{dashboard::render_dashboard, teams::handle_teams},
    config::{default_database_path, resolve_database_path},
    CricketDatabase, DB_PATH_ENV_VAR,
};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_resolve_database_path() {
    // All env var cases live in one test to avoid races between threads
    std::env::remove_var(DB_PATH_ENV_VAR);
    if let Ok(default) = default_database_path() {
        assert_eq!(resolve_database_path(None).unwrap(), default);
    }

    std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from-env.db");
    assert_eq!(
        resolve_database_path(None).unwrap(),
        PathBuf::from("/tmp/from-env.db")
    );

    // Flag overrides env
    assert_eq!(
        resolve_database_path(Some(PathBuf::from("/tmp/flag.db"))).unwrap(),
        PathBuf::from("/tmp/flag.db")
    );

    std::env::remove_var(DB_PATH_ENV_VAR);
}

#[test]
fn test_parsed_commands_drive_the_store() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("cli.db");
    let db_arg = db_path.to_string_lossy().to_string();

    let run = |args: &[&str]| -> bool {
        let mut argv = vec!["cricket-db", "--db", db_arg.as_str()];
        argv.extend_from_slice(args);
        let app = Cricket::try_parse_from(argv).unwrap();
        let mut db = CricketDatabase::open(app.db.as_deref().unwrap()).unwrap();
        match app.command {
            Commands::Teams { cmd } => handle_teams(&mut db, cmd).unwrap(),
            other => panic!("Unexpected command: {:?}", other),
        }
    };

    assert!(run(&["teams", "create", "--id", "1", "--name", "Lahore", "--coach", "Aqib"]));
    assert!(!run(&["teams", "create", "--id", "1", "--name", "Karachi"]));
    assert!(run(&["teams", "update", "--id", "1", "--name", "Lahore Qalandars"]));
    assert!(!run(&["teams", "delete", "--id", "1"]));
    assert!(run(&["teams", "read"]));

    let db = CricketDatabase::open(&db_path).unwrap();
    let teams = db.read_teams().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "Lahore Qalandars");
    // Update overwrites every mutable field, so the omitted coach is now empty
    assert_eq!(teams[0].coach_name, "");
    drop(db);

    assert!(run(&["teams", "delete", "--id", "1", "--yes"]));
    let db = CricketDatabase::open(&db_path).unwrap();
    assert!(db.read_teams().unwrap().is_empty());
}

#[test]
fn test_delete_requires_positive_id() {
    let parsed = Cricket::try_parse_from(["cricket-db", "teams", "delete", "--id", "0"]);
    assert!(parsed.is_err());

    let parsed = Cricket::try_parse_from(["cricket-db", "teams", "delete", "--id", "2"]).unwrap();
    match parsed.command {
        Commands::Teams {
            cmd: TeamCmd::Delete(args),
        } => {
            assert_eq!(args.id, 2);
            assert!(!args.yes);
        }
        other => panic!("Unexpected command: {:?}", other),
    }
}

#[test]
fn test_dashboard_json_is_serializable() {
    let db = CricketDatabase::open_in_memory().unwrap();
    let dashboard = db.dashboard().unwrap();

    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["total_teams"], 0);
    assert!(json["top_scorers"].as_array().unwrap().is_empty());
    assert!(render_dashboard(&dashboard).starts_with("Cricket Database Dashboard"));
}
