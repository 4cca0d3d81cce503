//! Integration tests for the scoreboard
//!
//! These tests drive the public API end to end with a deterministic clock:
//! - Starting, updating and finishing matches
//! - Team exclusivity and score monotonicity
//! - Summary ranking and line format
//! - Configuration of the lookup orientation

use chrono::{DateTime, Duration, TimeZone, Utc};
use scoreboard::domain::football_match::Score;
use scoreboard::infrastructure::{InMemoryMatchStore, ManualClock};
use scoreboard::{LookupMode, Match, Scoreboard, ScoreboardConfig, ScoreboardError};
use std::sync::Arc;

/// Route library logs to the test harness output
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn kick_off() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 11, 19, 0, 0).unwrap()
}

/// Board whose clock the test can move between kick-offs
fn setup_board() -> (Scoreboard<InMemoryMatchStore, Arc<ManualClock>>, Arc<ManualClock>) {
    init_tracing();
    let clock = Arc::new(ManualClock::new(kick_off()));
    (Scoreboard::with_clock(Arc::clone(&clock)), clock)
}

fn fixtures(matches: &[Match]) -> Vec<String> {
    matches
        .iter()
        .map(|m| format!("{} - {}", m.home_team(), m.away_team()))
        .collect()
}

#[test]
fn test_world_cup_summary() {
    let (mut board, clock) = setup_board();

    let games = [
        ("Mexico", "Canada", 0, 5),
        ("Spain", "Brazil", 10, 2),
        ("Germany", "France", 2, 2),
        ("Uruguay", "Italy", 6, 6),
        ("Argentina", "Australia", 3, 1),
    ];
    for (home, away, _, _) in games {
        board.start_new_match(home, away).expect("start match");
        clock.advance(Duration::minutes(5));
    }
    for (home, away, home_score, away_score) in games {
        board
            .update_score(home, away, home_score, away_score)
            .expect("update score");
    }

    let lines = board.summary_lines().expect("summary");

    assert_eq!(
        lines,
        vec![
            "Uruguay 6 - Italy 6",
            "Spain 10 - Brazil 2",
            "Mexico 0 - Canada 5",
            "Argentina 3 - Australia 1",
            "Germany 2 - France 2",
        ]
    );
}

#[test]
fn test_later_match_with_higher_total_leads_summary() {
    let (mut board, clock) = setup_board();

    board.start_new_match("Mexico", "Canada").unwrap();
    clock.advance(Duration::minutes(1));
    board.start_new_match("Spain", "Brazil").unwrap();

    board.update_score("Mexico", "Canada", 0, 5).unwrap();
    board.update_score("Spain", "Brazil", 10, 2).unwrap();

    let summary = board.summary().unwrap();
    assert_eq!(fixtures(&summary), vec!["Spain - Brazil", "Mexico - Canada"]);
    assert_eq!(summary[0].total_score(), 12);
    assert_eq!(summary[1].total_score(), 5);
}

#[test]
fn test_started_match_is_listed_at_nil_nil() {
    let (mut board, _) = setup_board();

    let game = board.start_new_match("Team A", "Team B").unwrap();

    assert_eq!(game.score(), Score { home: 0, away: 0 });
    assert_eq!(game.started_at(), kick_off());
    assert_eq!(board.active_matches().unwrap(), vec![game]);
}

#[test]
fn test_active_matches_keep_start_order() {
    let (mut board, clock) = setup_board();

    for (home, away) in [("Team A", "Team B"), ("Team C", "Team D"), ("Team E", "Team F")] {
        board.start_new_match(home, away).unwrap();
        clock.advance(Duration::seconds(10));
    }
    board.update_score("Team E", "Team F", 3, 3).unwrap();

    assert_eq!(
        fixtures(&board.active_matches().unwrap()),
        vec!["Team A - Team B", "Team C - Team D", "Team E - Team F"]
    );
}

#[test]
fn test_team_busy_regardless_of_case_and_whitespace() {
    let (mut board, _) = setup_board();
    board.start_new_match("Brazil", "Serbia").unwrap();

    for (home, away) in [("  brazil", "Cameroon"), ("Cameroon", "SERBIA "), ("bRaZiL", "Swiss")] {
        let result = board.start_new_match(home, away);
        assert!(
            matches!(result, Err(ScoreboardError::TeamBusy(_))),
            "{} vs {} should be rejected, got {:?}",
            home,
            away,
            result
        );
    }
    assert_eq!(board.len().unwrap(), 1);
}

#[test]
fn test_score_cannot_go_down() {
    let (mut board, _) = setup_board();
    board.start_new_match("Team A", "Team B").unwrap();
    board.update_score("Team A", "Team B", 2, 0).unwrap();

    let result = board.update_score("Team A", "Team B", 1, 0);

    assert!(matches!(result, Err(ScoreboardError::ScoreReduced { .. })));
}

#[test]
fn test_negative_score_leaves_match_unchanged() {
    let (mut board, _) = setup_board();
    board.start_new_match("Team A", "Team B").unwrap();
    board.update_score("Team A", "Team B", 1, 1).unwrap();

    for (home, away) in [(-1, 1), (1, -1), (-3, -3)] {
        let result = board.update_score("Team A", "Team B", home, away);
        assert_eq!(result, Err(ScoreboardError::NegativeScore { home, away }));
    }

    let game = board.find_match("Team A", "Team B").unwrap().expect("still active");
    assert_eq!(game.score(), Score { home: 1, away: 1 });
}

#[test]
fn test_finish_match_with_loose_team_name() {
    let (mut board, _) = setup_board();
    board.start_new_match("USA", "England").unwrap();
    board.start_new_match("Iran", "Wales").unwrap();

    let finished = board.finish_match(" usa ", "england").unwrap();

    assert_eq!(finished.home_team(), "USA");
    assert_eq!(fixtures(&board.active_matches().unwrap()), vec!["Iran - Wales"]);
    assert_eq!(board.find_match("USA", "England").unwrap(), None);
}

#[test]
fn test_finished_match_cannot_be_updated() {
    let (mut board, _) = setup_board();
    board.start_new_match("Team A", "Team B").unwrap();
    board.finish_match("Team A", "Team B").unwrap();

    let result = board.update_score("Team A", "Team B", 1, 0);

    assert!(matches!(result, Err(ScoreboardError::MatchNotFound { .. })));
    assert!(board.finish_match("Team A", "Team B").is_err());
}

#[test]
fn test_either_lookup_mode_from_config() {
    init_tracing();
    let config = ScoreboardConfig::from_lookup(|key| {
        (key == scoreboard::config::LOOKUP_MODE_VAR).then(|| "either".to_string())
    })
    .unwrap();
    assert_eq!(config.lookup_mode, LookupMode::Either);

    let mut board = Scoreboard::new(InMemoryMatchStore::new(), ManualClock::new(kick_off()), config);
    board.start_new_match("Japan", "Croatia").unwrap();

    let updated = board.update_score("Croatia", "Japan", 1, 0).unwrap();

    assert_eq!(updated.to_string(), "Japan 0 - Croatia 1");
}

#[test]
fn test_summary_serializes_to_json() {
    let (mut board, _) = setup_board();
    board.start_new_match("Spain", "Brazil").unwrap();
    board.update_score("Spain", "Brazil", 10, 2).unwrap();

    let json = serde_json::to_value(board.summary().unwrap()).unwrap();

    assert_eq!(json[0]["home_team"], "Spain");
    assert_eq!(json[0]["away_team"], "Brazil");
    assert_eq!(json[0]["score"]["home"], 10);
    assert_eq!(json[0]["score"]["away"], 2);

    let back: Vec<Match> = serde_json::from_value(json).unwrap();
    assert_eq!(back, board.summary().unwrap());
}
