//! Result entry: scoring a match, advancing its winner, and status transitions.
//!
//! Callers must serialize result entry per tournament; two concurrent submissions
//! on the same bracket path would race on the next match's slots.

use crate::config::Rules;
use crate::models::{
    GameMatch, MatchEvents, MatchId, MatchStatus, Side, TeamId, TournamentError,
};
use serde::{Deserialize, Serialize};

/// A reported score (and its events) for one match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResultReport {
    pub score_a: u32,
    pub score_b: u32,
    #[serde(default)]
    pub events: MatchEvents,
}

impl ResultReport {
    pub fn new(score_a: u32, score_b: u32) -> Self {
        Self {
            score_a,
            score_b,
            events: MatchEvents::default(),
        }
    }

    pub fn with_events(mut self, events: MatchEvents) -> Self {
        self.events = events;
        self
    }
}

/// The scored match, plus the next bracket match if the winner was placed into it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultOutcome {
    pub updated: GameMatch,
    pub propagated: Option<GameMatch>,
}

/// Apply `report` to `game` and place the winner into `next`.
///
/// `next` must be the match `game.next_match` points to (and must be supplied if
/// it is set). The winner goes into the first empty slot of `next`, A before B.
/// Re-applying a corrected score is allowed: if the winner changes, the old
/// winner's slot in `next` is handed to the new winner, unless `next` is already
/// finished, which is a `Conflict`.
///
/// Level scores are fine in group play; a level knockout match is rejected with
/// `UndecidedKnockout` and nothing changes.
pub fn apply_result(
    game: &GameMatch,
    next: Option<&GameMatch>,
    report: ResultReport,
) -> Result<ResultOutcome, TournamentError> {
    if game.status == MatchStatus::Cancelled {
        return Err(TournamentError::InvalidTransition(game.id));
    }
    if game.participants().is_none() {
        return Err(TournamentError::MissingParticipant(game.id));
    }
    match (game.next_match, next) {
        (Some(expected), Some(n)) if n.id != expected => {
            return Err(TournamentError::WrongNextMatch(game.id))
        }
        (None, Some(_)) => return Err(TournamentError::WrongNextMatch(game.id)),
        (Some(expected), None) => return Err(TournamentError::MatchNotFound(expected)),
        _ => {}
    }
    if game.label.is_knockout() && report.score_a == report.score_b {
        log::warn!("rejected level score for knockout match {}", game.id);
        return Err(TournamentError::UndecidedKnockout(game.id));
    }

    let previous = game.winner();
    let mut updated = game.clone();
    updated.score_a = Some(report.score_a);
    updated.score_b = Some(report.score_b);
    updated.status = MatchStatus::Finished;
    updated.events = report.events;

    let propagated = match (updated.winner(), next) {
        (Some(winner), Some(next)) => Some(advance(next, previous, winner)?),
        _ => None,
    };
    log::debug!(
        "match {} finished {}-{}{}",
        updated.id,
        report.score_a,
        report.score_b,
        if propagated.is_some() { ", winner advanced" } else { "" }
    );
    Ok(ResultOutcome {
        updated,
        propagated,
    })
}

/// Apply a result inside a tournament's match list, following links and
/// completing single-feeder walkovers along the way.
///
/// All-or-nothing: on error `matches` is untouched. Returns the ids of every
/// match that changed, the scored match first.
pub fn record_result(
    matches: &mut [GameMatch],
    match_id: MatchId,
    report: ResultReport,
    rules: &Rules,
) -> Result<Vec<MatchId>, TournamentError> {
    let mut work = matches.to_vec();
    let idx = index_of(&work, match_id)?;
    let next_idx = match work[idx].next_match {
        Some(id) => Some(index_of(&work, id)?),
        None => None,
    };
    let previous = work[idx].winner();
    let outcome = apply_result(&work[idx], next_idx.map(|i| &work[i]), report)?;

    let mut changed = vec![match_id];
    work[idx] = outcome.updated;
    if let (Some(ni), Some(next)) = (next_idx, outcome.propagated) {
        if next != work[ni] {
            changed.push(next.id);
        }
        work[ni] = next;
        cascade_walkovers(&mut work, ni, previous, rules, &mut changed)?;
    }

    matches.clone_from_slice(&work);
    Ok(changed)
}

/// Scheduled → InProgress. Both participants must be known.
pub fn start_match(game: &mut GameMatch) -> Result<(), TournamentError> {
    if game.status != MatchStatus::Scheduled {
        return Err(TournamentError::InvalidTransition(game.id));
    }
    if game.participants().is_none() {
        return Err(TournamentError::MissingParticipant(game.id));
    }
    game.status = MatchStatus::InProgress;
    Ok(())
}

/// Cancel a match that has not finished. Cancelled matches never count in tables.
pub fn cancel_match(game: &mut GameMatch) -> Result<(), TournamentError> {
    match game.status {
        MatchStatus::Scheduled | MatchStatus::InProgress => {
            game.status = MatchStatus::Cancelled;
            Ok(())
        }
        MatchStatus::Finished | MatchStatus::Cancelled => {
            Err(TournamentError::InvalidTransition(game.id))
        }
    }
}

/// Place `winner` into `next`, replacing `previous` if a corrected result changed the winner.
///
/// A finished single-feeder match is an automatic walkover rather than a played
/// result, so it is reopened instead of raising a conflict.
pub(crate) fn advance(
    next: &GameMatch,
    previous: Option<TeamId>,
    winner: TeamId,
) -> Result<GameMatch, TournamentError> {
    let mut next = next.clone();
    let reopenable = next.feeders == 1;

    if let Some(prev) = previous.filter(|&p| p != winner) {
        if let Some(side) = next.side_of(prev) {
            if next.is_finished() && !reopenable {
                log::warn!(
                    "cannot replace {} with {} in finished match {}",
                    prev,
                    winner,
                    next.id
                );
                return Err(TournamentError::Conflict {
                    next: next.id,
                    occupant: prev,
                });
            }
            if next.is_finished() {
                next.status = MatchStatus::Scheduled;
                next.score_a = None;
                next.score_b = None;
            }
            set_slot(&mut next, side, winner);
            return Ok(next);
        }
    }

    if next.side_of(winner).is_some() {
        return Ok(next);
    }
    match (next.side_a, next.side_b) {
        (None, _) => next.side_a = Some(winner),
        (Some(_), None) => next.side_b = Some(winner),
        (Some(_), Some(occupant)) => {
            log::warn!("no free slot for {} in match {}", winner, next.id);
            return Err(TournamentError::Conflict {
                next: next.id,
                occupant,
            });
        }
    }
    Ok(next)
}

/// Finish a match that has exactly one entrant as a walkover. Returns the entrant.
pub(crate) fn walkover(game: &mut GameMatch, rules: &Rules) -> Option<TeamId> {
    let (win, lose) = rules.walkover_score;
    let entrant = match (game.side_a, game.side_b) {
        (Some(a), None) => {
            game.score_a = Some(win);
            game.score_b = Some(lose);
            a
        }
        (None, Some(b)) => {
            game.score_a = Some(lose);
            game.score_b = Some(win);
            b
        }
        _ => return None,
    };
    game.status = MatchStatus::Finished;
    Some(entrant)
}

/// Starting at `idx`, settle single-feeder matches as walkovers and push their
/// entrant onward. `previous` is the team the chain carried before a correction;
/// along a walkover chain it is the same team at every step.
pub(crate) fn cascade_walkovers(
    matches: &mut [GameMatch],
    mut idx: usize,
    previous: Option<TeamId>,
    rules: &Rules,
    changed: &mut Vec<MatchId>,
) -> Result<(), TournamentError> {
    loop {
        let game = &mut matches[idx];
        if game.feeders != 1 || game.status != MatchStatus::Scheduled {
            return Ok(());
        }
        let Some(entrant) = walkover(game, rules) else {
            return Ok(());
        };
        push_unique(changed, game.id);
        let Some(next_id) = game.next_match else {
            return Ok(());
        };
        let ni = index_of(matches, next_id)?;
        matches[ni] = advance(&matches[ni], previous, entrant)?;
        push_unique(changed, next_id);
        idx = ni;
    }
}

pub(crate) fn index_of(matches: &[GameMatch], id: MatchId) -> Result<usize, TournamentError> {
    matches
        .iter()
        .position(|m| m.id == id)
        .ok_or(TournamentError::MatchNotFound(id))
}

fn set_slot(game: &mut GameMatch, side: Side, team: TeamId) {
    match side {
        Side::A => game.side_a = Some(team),
        Side::B => game.side_b = Some(team),
    }
}

fn push_unique(changed: &mut Vec<MatchId>, id: MatchId) {
    if !changed.contains(&id) {
        changed.push(id);
    }
}
