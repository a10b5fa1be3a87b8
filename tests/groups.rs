//! Integration tests for the group draw, roster edits and the calendar.

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{team_ids, tid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tournament_fixtures::{
    assign_dates, build_round_robin, draw_groups, group_name, ErrorKind, Group, Tournament,
    TournamentError, TournamentFormat,
};

#[test]
fn group_names_run_past_z() {
    assert_eq!(group_name(0), "A");
    assert_eq!(group_name(25), "Z");
    assert_eq!(group_name(26), "AA");
    assert_eq!(group_name(27), "AB");
}

#[test]
fn draw_deals_teams_evenly() {
    let teams = team_ids(10);
    let mut rng = StdRng::seed_from_u64(7);
    let groups = draw_groups(&teams, 3, &mut rng).unwrap();

    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    let mut sizes: Vec<_> = groups.iter().map(|g| g.team_ids.len()).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, [3, 3, 4]);

    let drawn: HashSet<_> = groups.iter().flat_map(|g| g.team_ids.iter().copied()).collect();
    assert_eq!(drawn, teams.iter().copied().collect());

    let mut tournament = Tournament::with_teams("Cup", TournamentFormat::Groups, teams).unwrap();
    tournament.set_groups(groups).unwrap();
}

#[test]
fn draw_rejects_impossible_group_counts() {
    let teams = team_ids(5);
    let mut rng = StdRng::seed_from_u64(1);
    for count in [0, 3] {
        let err = draw_groups(&teams, count, &mut rng).unwrap_err();
        assert!(matches!(err, TournamentError::InvalidGroupCount { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
    assert!(draw_groups(&teams, 2, &mut rng).is_ok());
}

#[test]
fn roster_edits_are_validated() {
    let teams = team_ids(4);
    let outsider = team_ids(1)[0];
    let mut tournament =
        Tournament::with_teams("Cup", TournamentFormat::Groups, teams.clone()).unwrap();

    assert!(matches!(
        tournament.add_team(teams[0]),
        Err(TournamentError::DuplicateTeam(_))
    ));
    assert!(matches!(
        tournament.set_groups(vec![Group::new("A", vec![teams[0], outsider])]),
        Err(TournamentError::TeamNotFound(id)) if id == outsider
    ));
    assert!(matches!(
        tournament.set_groups(vec![
            Group::new("A", vec![teams[0], teams[1]]),
            Group::new("B", vec![teams[1], teams[2]]),
        ]),
        Err(TournamentError::InvalidGroups(_))
    ));
    assert!(matches!(
        tournament.set_groups(vec![Group::new("A", vec![]), Group::new("A", vec![])]),
        Err(TournamentError::InvalidGroups(_))
    ));
    assert!(tournament.groups.is_empty());

    tournament
        .set_groups(vec![
            Group::new("A", teams[0..2].to_vec()),
            Group::new("B", teams[2..4].to_vec()),
        ])
        .unwrap();
    tournament.remove_team(teams[1]).unwrap();
    assert_eq!(tournament.teams.len(), 3);
    assert_eq!(tournament.groups[0].team_ids, vec![teams[0]]);
}

#[test]
fn dates_advance_by_round() {
    let teams = team_ids(4);
    let mut matches = build_round_robin(tid(), &teams, None).unwrap();
    let start = Utc.with_ymd_and_hms(2025, 9, 6, 18, 30, 0).unwrap();
    assign_dates(&mut matches, start, Duration::days(3)).unwrap();

    for m in &matches {
        let days = 3 * i64::from(m.round - 1);
        assert_eq!(m.scheduled_at, Some(start + Duration::days(days)));
    }
}

#[test]
fn dates_past_the_calendar_are_rejected() {
    let teams = team_ids(4);
    let mut matches = build_round_robin(tid(), &teams, None).unwrap();
    let start = Utc.with_ymd_and_hms(2025, 9, 6, 18, 30, 0).unwrap();

    let err = assign_dates(&mut matches, start, Duration::days(200_000_000)).unwrap_err();
    assert!(matches!(err, TournamentError::DateOutOfRange { round: 2 }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(matches.iter().all(|m| m.scheduled_at.is_none()));
}
