//! Round-robin schedules via the circle method, one schedule per group.

use crate::config::Rules;
use crate::models::{
    GameMatch, RoundLabel, TeamId, Tournament, TournamentError, TournamentId,
};
use std::collections::HashSet;

/// A seat in the circle: an index into the team list, or the bye.
type Seat = Option<usize>;

/// Pairings of team indices for `team_count` teams, one Vec per round.
///
/// An odd count gets a bye seat, so there are always T−1 rounds of ⌊T/2⌋ pairs
/// (T = padded count); pairs touching the bye are dropped. Seat 0 stays
/// fixed; seat k meets seat T−1−k, then seats 1..T−1 rotate one step so the
/// last seat moves to the front of that range.
pub fn circle_pairings(team_count: usize) -> Vec<Vec<(usize, usize)>> {
    if team_count < 2 {
        return Vec::new();
    }
    let mut seats: Vec<Seat> = (0..team_count).map(Some).collect();
    if team_count % 2 != 0 {
        seats.push(None);
    }
    let t = seats.len();

    let mut rounds = Vec::with_capacity(t - 1);
    for _ in 0..t - 1 {
        let round = (0..t / 2)
            .filter_map(|k| Some((seats[k]?, seats[t - 1 - k]?)))
            .collect();
        rounds.push(round);
        seats = rotate(&seats);
    }
    rounds
}

/// Anchor stays put; the rest shift right by one with wrap-around.
fn rotate(seats: &[Seat]) -> Vec<Seat> {
    let mut next = seats.to_vec();
    if next.len() > 2 {
        next[1..].rotate_right(1);
    }
    next
}

/// Build every fixture of a single round robin among `team_ids`.
///
/// Round numbers are matchdays starting at 1 for this group alone.
pub fn build_round_robin(
    tournament_id: TournamentId,
    team_ids: &[TeamId],
    group: Option<&str>,
) -> Result<Vec<GameMatch>, TournamentError> {
    if team_ids.len() < 2 {
        return Err(TournamentError::NotEnoughTeams {
            required: 2,
            actual: team_ids.len(),
        });
    }
    let mut seen = HashSet::new();
    if let Some(&dup) = team_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(TournamentError::DuplicateTeam(dup));
    }

    let mut matches = Vec::new();
    for (r, pairs) in circle_pairings(team_ids.len()).into_iter().enumerate() {
        let matchday = r as u32 + 1;
        for (p, (a, b)) in pairs.into_iter().enumerate() {
            matches.push(
                GameMatch::new(
                    tournament_id,
                    matchday,
                    RoundLabel::GroupStage { matchday },
                    p as u32 + 1,
                    Some(team_ids[a]),
                    Some(team_ids[b]),
                )
                .with_group(group),
            );
        }
    }
    log::debug!(
        "built round robin for group {}: {} teams, {} matches",
        group.unwrap_or("-"),
        team_ids.len(),
        matches.len()
    );
    Ok(matches)
}

/// Round-robin fixtures for a whole tournament: one schedule per group, or one
/// schedule named `rules.default_group_name` when no groups are defined.
/// Groups with fewer than two teams are skipped.
pub fn build_group_stage(
    tournament: &Tournament,
    rules: &Rules,
) -> Result<Vec<GameMatch>, TournamentError> {
    if tournament.teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams {
            required: 2,
            actual: tournament.teams.len(),
        });
    }
    let mut matches = Vec::new();
    for group in tournament.fixture_groups(&rules.default_group_name) {
        if group.team_ids.len() < 2 {
            log::debug!("group {} has fewer than 2 teams, no fixtures", group.name);
            continue;
        }
        matches.extend(build_round_robin(
            tournament.id,
            &group.team_ids,
            Some(&group.name),
        )?);
    }
    Ok(matches)
}
