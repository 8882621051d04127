//! Unit tests for command handlers and rendering

use super::{
    batting::handle_batting,
    bowling::handle_bowling,
    common::*,
    dashboard::render_dashboard,
    matches::handle_matches,
    players::handle_players,
    teams::{handle_teams, teams_table},
};
use crate::cli::{
    BattingCmd, BattingFields, BowlingCmd, BowlingFields, DeleteArgs, MatchCmd, MatchFields,
    PlayerCmd, PlayerFields, ReadArgs, TeamCmd, TeamFields,
};
use crate::cli::types::{
    date::today,
    ids::{MatchId, PlayerId, TeamId},
    role::Role,
};
use crate::storage::{CricketDatabase, Match, Outcome, Team};
use chrono::NaiveDate;

fn team_fields(id: u32, name: &str) -> TeamFields {
    TeamFields {
        id: TeamId::new(id),
        name: name.to_string(),
        coach: "Coach".to_string(),
    }
}

fn player_fields(id: u32, first: &str, last: &str, role: Role) -> PlayerFields {
    PlayerFields {
        id: PlayerId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        role,
        team_id: Some(TeamId::new(1)),
    }
}

fn match_fields(id: u32, date: Option<NaiveDate>) -> MatchFields {
    MatchFields {
        id: MatchId::new(id),
        date,
        venue: "Lord's".to_string(),
        team1_id: TeamId::new(1),
        team2_id: TeamId::new(2),
    }
}

#[test]
fn test_change_outcome_messages() {
    assert_eq!(
        change_outcome(true, "Team", "updated"),
        Outcome::success("Team updated!")
    );
    assert_eq!(
        change_outcome(false, "Player", "deleted"),
        Outcome::failure("Player not found!")
    );
}

#[test]
fn test_unconfirmed_delete_is_a_failure() {
    let outcome = unconfirmed_delete("Match", 4);
    assert!(!outcome.is_success());
    assert!(outcome.message().contains("--yes"));
    assert!(outcome.message().contains("match 4"));
}

#[test]
fn test_rate_formatting() {
    assert_eq!(rate(200.0), "200.00");
    assert_eq!(rate(8.857142), "8.86");
}

#[test]
fn test_match_fields_default_to_today() {
    let fixture: Match = match_fields(1, None).into();
    assert_eq!(fixture.date, today());

    let date = NaiveDate::from_ymd_opt(2023, 11, 19).unwrap();
    let fixture: Match = match_fields(1, Some(date)).into();
    assert_eq!(fixture.date, date);
}

#[test]
fn test_teams_table_aligns_by_column() {
    let teams = vec![
        Team {
            team_id: TeamId::new(1),
            name: "NaN".to_string(),
            coach_name: "1e5".to_string(),
        },
        Team {
            team_id: TeamId::new(12),
            name: "Perth Scorchers".to_string(),
            coach_name: String::new(),
        },
    ];

    let rendered = teams_table(&teams).to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert!(lines[0].starts_with("TeamID  TeamName"));
    assert!(lines[2].starts_with("     1  NaN   "));
    assert!(lines[2].ends_with("  1e5"));
    assert!(lines[3].starts_with("    12  Perth Scorchers"));
}

#[test]
fn test_team_handler_lifecycle() {
    let mut db = CricketDatabase::open_in_memory().unwrap();

    assert!(handle_teams(&mut db, TeamCmd::Create(team_fields(1, "India"))).unwrap());
    assert!(!handle_teams(&mut db, TeamCmd::Create(team_fields(1, "Again"))).unwrap());
    assert!(handle_teams(&mut db, TeamCmd::Update(team_fields(1, "Bharat"))).unwrap());
    assert!(!handle_teams(&mut db, TeamCmd::Update(team_fields(2, "Nobody"))).unwrap());
    assert!(handle_teams(&mut db, TeamCmd::Read(ReadArgs { json: false })).unwrap());
    assert!(handle_teams(&mut db, TeamCmd::Read(ReadArgs { json: true })).unwrap());

    assert_eq!(db.read_teams().unwrap()[0].name, "Bharat");

    // Without confirmation nothing is removed
    let unconfirmed = DeleteArgs { id: 1, yes: false };
    assert!(!handle_teams(&mut db, TeamCmd::Delete(unconfirmed)).unwrap());
    assert_eq!(db.read_teams().unwrap().len(), 1);

    let confirmed = DeleteArgs { id: 1, yes: true };
    assert!(handle_teams(&mut db, TeamCmd::Delete(confirmed)).unwrap());
    assert!(db.read_teams().unwrap().is_empty());
}

#[test]
fn test_player_and_match_handlers() {
    let mut db = CricketDatabase::open_in_memory().unwrap();

    let create = PlayerCmd::Create(player_fields(7, "Ben", "Stokes", Role::AllRounder));
    assert!(handle_players(&mut db, create).unwrap());
    let update = PlayerCmd::Update(player_fields(7, "Benjamin", "Stokes", Role::AllRounder));
    assert!(handle_players(&mut db, update).unwrap());
    assert_eq!(db.read_players().unwrap()[0].player.first_name, "Benjamin");
    let delete = PlayerCmd::Delete(DeleteArgs { id: 8, yes: true });
    assert!(!handle_players(&mut db, delete).unwrap());

    assert!(handle_matches(&mut db, MatchCmd::Create(match_fields(3, None))).unwrap());
    assert!(!handle_matches(&mut db, MatchCmd::Create(match_fields(3, None))).unwrap());
    let delete = MatchCmd::Delete(DeleteArgs { id: 3, yes: true });
    assert!(handle_matches(&mut db, delete).unwrap());
}

#[test]
fn test_stats_handlers() {
    let mut db = CricketDatabase::open_in_memory().unwrap();

    let innings = BattingFields {
        player_id: PlayerId::new(1),
        match_id: MatchId::new(1),
        runs: 50,
        balls_faced: 25,
        fours: 5,
        sixes: 2,
    };
    assert!(handle_batting(&mut db, BattingCmd::Create(innings)).unwrap());
    assert_eq!(db.read_batting_stats().unwrap()[0].strike_rate, 200.0);

    let spell = |wickets| BowlingFields {
        player_id: PlayerId::new(1),
        match_id: MatchId::new(1),
        overs: 4.0,
        maidens: 1,
        runs_conceded: 24,
        wickets,
    };
    assert!(handle_bowling(&mut db, BowlingCmd::Create(spell(2))).unwrap());
    assert!(!handle_bowling(&mut db, BowlingCmd::Create(spell(3))).unwrap());
    assert!(handle_bowling(&mut db, BowlingCmd::Read(ReadArgs { json: true })).unwrap());
    assert_eq!(db.read_bowling_stats().unwrap()[0].economy_rate, 6.0);
}

#[test]
fn test_render_dashboard_sections() {
    let mut db = CricketDatabase::open_in_memory().unwrap();
    handle_teams(&mut db, TeamCmd::Create(team_fields(1, "England"))).unwrap();
    handle_players(
        &mut db,
        PlayerCmd::Create(player_fields(1, "Joe", "Root", Role::Batsman)),
    )
    .unwrap();
    handle_batting(
        &mut db,
        BattingCmd::Create(BattingFields {
            player_id: PlayerId::new(1),
            match_id: MatchId::new(1),
            runs: 120,
            balls_faced: 200,
            fours: 12,
            sixes: 0,
        }),
    )
    .unwrap();
    handle_batting(
        &mut db,
        BattingCmd::Create(BattingFields {
            player_id: PlayerId::new(99),
            match_id: MatchId::new(1),
            runs: 4,
            balls_faced: 10,
            fours: 1,
            sixes: 0,
        }),
    )
    .unwrap();

    let rendered = render_dashboard(&db.dashboard().unwrap());
    assert!(rendered.contains("Total Teams: 1"));
    assert!(rendered.contains("Total Players: 1"));
    assert!(rendered.contains("Total Matches: 0"));
    assert!(rendered.contains("Players by Role"));
    assert!(rendered.contains("Top 5 Run Scorers"));
    assert!(rendered.contains("Joe Root"));
    assert!(rendered.contains("Player 99"));
    assert!(rendered.contains("60.00"));
    // No bowling figures, so no wicket takers view
    assert!(!rendered.contains("Top 5 Wicket Takers"));
}

#[test]
fn test_render_empty_dashboard() {
    let db = CricketDatabase::open_in_memory().unwrap();
    let rendered = render_dashboard(&db.dashboard().unwrap());
    assert!(rendered.contains("Total Teams: 0"));
    assert!(!rendered.contains("Players by Role"));
    assert!(!rendered.contains("Top 5 Run Scorers"));
}
