//! Add missing round-robin fixtures after teams or groups change.

use crate::config::Rules;
use crate::logic::round_robin::build_round_robin;
use crate::models::{GameMatch, TeamId, Tournament, TournamentError};
use std::collections::HashSet;

/// Unordered pair key: both participant orders map to the same key.
fn pair_key(a: TeamId, b: TeamId) -> (TeamId, TeamId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// New fixtures only: the full target schedule minus every pair already present
/// in `existing` (in either order).
///
/// Calling again with the returned matches added to `existing` yields nothing.
/// Elimination brackets are fixed at creation and are rejected.
pub fn extend_round_robin(
    existing: &[GameMatch],
    tournament: &Tournament,
    rules: &Rules,
) -> Result<Vec<GameMatch>, TournamentError> {
    if tournament.format.is_elimination() {
        log::warn!("refused to regenerate bracket of tournament {}", tournament.id);
        return Err(TournamentError::BracketRegeneration);
    }
    if tournament.teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams {
            required: 2,
            actual: tournament.teams.len(),
        });
    }

    let mut played: HashSet<(TeamId, TeamId)> = existing
        .iter()
        .filter_map(GameMatch::participants)
        .map(|(a, b)| pair_key(a, b))
        .collect();

    let mut fresh = Vec::new();
    for group in tournament.fixture_groups(&rules.default_group_name) {
        if group.team_ids.len() < 2 {
            continue;
        }
        let target = build_round_robin(tournament.id, &group.team_ids, Some(&group.name))?;
        fresh.extend(target.into_iter().filter(|m| match m.participants() {
            Some((a, b)) => played.insert(pair_key(a, b)),
            None => false,
        }));
    }

    log::debug!(
        "tournament {}: {} existing matches, {} new fixtures",
        tournament.id,
        existing.len(),
        fresh.len()
    );
    Ok(fresh)
}
