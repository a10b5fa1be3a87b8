//! Integration tests for rule loading.

use std::collections::HashMap;
use tournament_fixtures::{ErrorKind, Rules, TournamentError};

#[test]
fn defaults() {
    let rules = Rules::default();
    assert_eq!(
        (rules.points_for_win, rules.points_for_draw, rules.points_for_loss),
        (3, 1, 0)
    );
    assert_eq!(rules.walkover_score, (1, 0));
    assert_eq!(rules.form_length, 5);
    assert_eq!(rules.top_scorers_limit, Some(20));
    assert_eq!(rules.default_group_name, "General");
    assert_eq!(rules.matchday_interval_days, 7);
}

#[test]
fn json_fills_missing_fields() {
    assert_eq!(Rules::from_json("{}").unwrap(), Rules::default());

    let rules = Rules::from_json(r#"{"points_for_win": 2, "top_scorers_limit": null}"#).unwrap();
    assert_eq!(rules.points_for_win, 2);
    assert_eq!(rules.points_for_draw, 1);
    assert_eq!(rules.top_scorers_limit, None);
}

#[test]
fn json_errors_are_invalid_input() {
    let err = Rules::from_json("{\"points_for_win\": -1}").unwrap_err();
    assert!(matches!(err, TournamentError::Rules(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = Rules::from_json(r#"{"walkover_score": [0, 0]}"#).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidRules(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn environment_overrides() {
    let vars: HashMap<&str, &str> = [
        ("FIXTURES_POINTS_FOR_WIN", "2"),
        ("FIXTURES_POINTS_FOR_DRAW", " 0 "),
        ("FIXTURES_FORM_LENGTH", "three"),
        ("FIXTURES_MATCHDAY_INTERVAL_DAYS", "3"),
        ("FIXTURES_TOP_SCORERS_LIMIT", "all"),
    ]
    .into_iter()
    .collect();
    let rules = Rules::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(rules.points_for_win, 2);
    assert_eq!(rules.points_for_draw, 0);
    assert_eq!(rules.points_for_loss, 0);
    assert_eq!(rules.form_length, 5);
    assert_eq!(rules.matchday_interval_days, 3);
    assert_eq!(rules.top_scorers_limit, None);
}

#[test]
fn empty_environment_gives_defaults() {
    assert_eq!(Rules::from_lookup(|_| None), Rules::default());
    let limited = Rules::from_lookup(|key| {
        (key == "FIXTURES_TOP_SCORERS_LIMIT").then(|| "10".to_string())
    });
    assert_eq!(limited.top_scorers_limit, Some(10));
}

#[test]
fn matchday_interval_must_be_in_range() {
    for json in [
        r#"{"matchday_interval_days": 0}"#,
        r#"{"matchday_interval_days": -7}"#,
        r#"{"matchday_interval_days": 200000000}"#,
    ] {
        let err = Rules::from_json(json).unwrap_err();
        assert!(matches!(err, TournamentError::InvalidRules(_)), "{json}");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
    assert_eq!(
        Rules::from_json(r#"{"matchday_interval_days": 14}"#)
            .unwrap()
            .matchday_interval_days,
        14
    );
}

#[test]
fn out_of_range_interval_in_environment_keeps_default() {
    for value in ["200000000", "-3", "0"] {
        let rules = Rules::from_lookup(|key| {
            (key == "FIXTURES_MATCHDAY_INTERVAL_DAYS").then(|| value.to_string())
        });
        assert_eq!(rules.matchday_interval_days, 7, "{value}");
        assert!(rules.validate().is_ok());
    }
}

#[test]
fn level_walkover_score_fails_validation() {
    let rules = Rules {
        walkover_score: (0, 0),
        ..Rules::default()
    };
    assert!(matches!(
        rules.validate(),
        Err(TournamentError::InvalidRules(_))
    ));
    assert!(Rules::default().validate().is_ok());
}
