//! Integration tests for bracket construction.

mod common;

use common::{at, by_id, init_logging, team_ids, tid};
use tournament_fixtures::{
    bracket_rounds, build_bracket, ErrorKind, MatchStatus, RoundLabel, Rules, TournamentError,
};

#[test]
fn round_counts_follow_halving() {
    init_logging();
    for n in [2usize, 3, 4, 5, 8, 9] {
        let teams = team_ids(n);
        let matches = build_bracket(tid(), &teams, &Rules::default()).unwrap();

        let expected_rounds = (n as f64).log2().ceil() as u32;
        let rounds = matches.iter().map(|m| m.round).max().unwrap();
        assert_eq!(rounds, expected_rounds, "n = {n}");
        assert_eq!(bracket_rounds(n), expected_rounds);

        let mut previous = n.div_ceil(2);
        assert_eq!(matches.iter().filter(|m| m.round == 1).count(), previous);
        for r in 2..=rounds {
            let count = matches.iter().filter(|m| m.round == r).count();
            assert_eq!(count, previous.div_ceil(2), "n = {n}, round {r}");
            previous = count;
        }
    }
}

#[test]
fn requires_two_teams() {
    let err = build_bracket(tid(), &team_ids(1), &Rules::default()).unwrap_err();
    assert!(matches!(
        err,
        TournamentError::NotEnoughTeams {
            required: 2,
            actual: 1
        }
    ));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn rejects_duplicate_entrants() {
    let teams = team_ids(3);
    let entrants = vec![teams[0], teams[1], teams[0]];
    assert!(matches!(
        build_bracket(tid(), &entrants, &Rules::default()),
        Err(TournamentError::DuplicateTeam(id)) if id == teams[0]
    ));
}

#[test]
fn links_feed_the_halved_position() {
    let matches = build_bracket(tid(), &team_ids(8), &Rules::default()).unwrap();
    let last_round = matches.iter().map(|m| m.round).max().unwrap();
    for m in &matches {
        if m.round == last_round {
            assert!(m.next_match.is_none());
            continue;
        }
        let next = by_id(&matches, m.next_match.expect("non-final has a next match"));
        assert_eq!(next.round, m.round + 1);
        assert_eq!(next.position, (m.position - 1) / 2 + 1);
    }
}

#[test]
fn first_round_pairs_consecutive_teams() {
    let teams = team_ids(4);
    let matches = build_bracket(tid(), &teams, &Rules::default()).unwrap();
    let first = at(&matches, 1, 1);
    let second = at(&matches, 1, 2);
    assert_eq!((first.side_a, first.side_b), (Some(teams[0]), Some(teams[1])));
    assert_eq!((second.side_a, second.side_b), (Some(teams[2]), Some(teams[3])));
    let final_match = at(&matches, 2, 1);
    assert_eq!((final_match.side_a, final_match.side_b), (None, None));
    assert_eq!(final_match.status, MatchStatus::Scheduled);
}

#[test]
fn odd_entrant_gets_walkover_and_advances() {
    let teams = team_ids(3);
    let matches = build_bracket(tid(), &teams, &Rules::default()).unwrap();

    let bye = at(&matches, 1, 2);
    assert_eq!(bye.side_a, Some(teams[2]));
    assert_eq!(bye.side_b, None);
    assert_eq!(bye.status, MatchStatus::Finished);
    assert_eq!((bye.score_a, bye.score_b), (Some(1), Some(0)));
    assert_eq!(bye.winner(), Some(teams[2]));

    let final_match = at(&matches, 2, 1);
    assert_eq!(final_match.side_a, Some(teams[2]));
    assert_eq!(final_match.side_b, None);
}

#[test]
fn single_feeder_rounds_pass_the_walkover_on() {
    let teams = team_ids(5);
    let matches = build_bracket(tid(), &teams, &Rules::default()).unwrap();

    let lone = at(&matches, 2, 2);
    assert_eq!(lone.feeders, 1);
    assert_eq!(lone.status, MatchStatus::Finished);
    assert_eq!(lone.winner(), Some(teams[4]));

    let fed_twice = at(&matches, 2, 1);
    assert_eq!(fed_twice.feeders, 2);
    assert_eq!(fed_twice.status, MatchStatus::Scheduled);

    let final_match = at(&matches, 3, 1);
    assert_eq!(final_match.side_a, Some(teams[4]));
    assert_eq!(final_match.side_b, None);
}

#[test]
fn custom_walkover_score() {
    let rules = Rules {
        walkover_score: (3, 0),
        ..Rules::default()
    };
    let matches = build_bracket(tid(), &team_ids(3), &rules).unwrap();
    let bye = at(&matches, 1, 2);
    assert_eq!((bye.score_a, bye.score_b), (Some(3), Some(0)));
}

#[test]
fn rounds_are_named_by_size() {
    let matches = build_bracket(tid(), &team_ids(8), &Rules::default()).unwrap();
    let names: Vec<String> = (1..=3).map(|r| at(&matches, r, 1).label.to_string()).collect();
    assert_eq!(names, ["Quarterfinal", "Semifinal", "Final"]);

    let matches = build_bracket(tid(), &team_ids(6), &Rules::default()).unwrap();
    assert_eq!(
        at(&matches, 1, 1).label,
        RoundLabel::Knockout {
            round: 1,
            name: None
        }
    );
    assert_eq!(at(&matches, 1, 1).label.to_string(), "Round 1");
}

#[test]
fn walkover_score_must_be_a_win() {
    for walkover_score in [(0, 0), (0, 1)] {
        let rules = Rules {
            walkover_score,
            ..Rules::default()
        };
        let err = build_bracket(tid(), &team_ids(3), &rules).unwrap_err();
        assert!(matches!(err, TournamentError::InvalidRules(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
