//! Shared helpers for the integration tests.
#![allow(dead_code)]

use tournament_fixtures::{
    GameMatch, MatchStatus, RoundLabel, Team, TeamId, TournamentId,
};
use uuid::Uuid;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n` fresh team ids (named T0, T1, ...).
pub fn team_ids(n: usize) -> Vec<TeamId> {
    (0..n).map(|i| Team::new(format!("T{i}")).id).collect()
}

/// A group-stage match already finished with the given score.
pub fn finished(round: u32, a: TeamId, b: TeamId, score_a: u32, score_b: u32) -> GameMatch {
    let mut m = GameMatch::new(
        Uuid::nil(),
        round,
        RoundLabel::GroupStage { matchday: round },
        1,
        Some(a),
        Some(b),
    );
    m.score_a = Some(score_a);
    m.score_b = Some(score_b);
    m.status = MatchStatus::Finished;
    m
}

/// Find the match at `position` in `round`.
pub fn at(matches: &[GameMatch], round: u32, position: u32) -> &GameMatch {
    matches
        .iter()
        .find(|m| m.round == round && m.position == position)
        .unwrap_or_else(|| panic!("no match at round {round} position {position}"))
}

pub fn by_id(matches: &[GameMatch], id: uuid::Uuid) -> &GameMatch {
    matches.iter().find(|m| m.id == id).expect("match exists")
}

pub fn tid() -> TournamentId {
    Uuid::new_v4()
}
