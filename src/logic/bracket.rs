//! Single-elimination bracket: match structure, advancement links and first-round walkovers.

use crate::config::Rules;
use crate::logic::results::{advance, cascade_walkovers, walkover};
use crate::models::{GameMatch, RoundLabel, TeamId, TournamentError, TournamentId};
use std::collections::HashSet;

/// Conventional name for a knockout round with `matches` fixtures.
pub fn knockout_round_name(matches: usize) -> Option<&'static str> {
    match matches {
        1 => Some("Final"),
        2 => Some("Semifinal"),
        4 => Some("Quarterfinal"),
        8 => Some("Round of 16"),
        _ => None,
    }
}

/// Number of bracket rounds for `teams` entrants: ⌈log2 n⌉.
pub fn bracket_rounds(teams: usize) -> u32 {
    teams.max(1).next_power_of_two().trailing_zeros()
}

/// Build the full bracket for `team_ids` in seeding order.
///
/// Round 1 pairs teams (2i, 2i+1); a trailing unpaired team gets a walkover
/// recorded with `rules.walkover_score`. Later rounds hold ⌈previous/2⌉ TBD
/// matches, and match p of round r feeds match ⌊(p−1)/2⌋ of round r+1.
/// Walkover winners are advanced immediately, so every entrant starts active.
/// Rules failing `Rules::validate` are rejected with `InvalidRules`.
///
/// Matches are returned ordered by round, then position.
pub fn build_bracket(
    tournament_id: TournamentId,
    team_ids: &[TeamId],
    rules: &Rules,
) -> Result<Vec<GameMatch>, TournamentError> {
    rules.validate()?;
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

    let total_rounds = bracket_rounds(team_ids.len());
    let mut matches: Vec<GameMatch> = Vec::new();
    // Index of the first match of each round in `matches`.
    let mut round_starts: Vec<usize> = Vec::with_capacity(total_rounds as usize);

    let first_round = team_ids.len().div_ceil(2);
    round_starts.push(0);
    let label = knockout_label(1, first_round);
    // First-round walkovers as (match index, entrant).
    let mut byes: Vec<(usize, TeamId)> = Vec::new();
    for (i, pair) in team_ids.chunks(2).enumerate() {
        let mut game = GameMatch::new(
            tournament_id,
            1,
            label.clone(),
            i as u32 + 1,
            Some(pair[0]),
            pair.get(1).copied(),
        );
        if let Some(entrant) = walkover(&mut game, rules) {
            byes.push((matches.len(), entrant));
        }
        matches.push(game);
    }

    let mut previous = first_round;
    for round in 2..=total_rounds {
        let count = previous.div_ceil(2);
        round_starts.push(matches.len());
        let label = knockout_label(round, count);
        for p in 0..count {
            let mut game =
                GameMatch::new(tournament_id, round, label.clone(), p as u32 + 1, None, None);
            game.feeders = (previous - 2 * p).min(2) as u8;
            matches.push(game);
        }
        previous = count;
    }

    // Link every non-final match to its successor.
    for r in 0..round_starts.len().saturating_sub(1) {
        let (start, next_start) = (round_starts[r], round_starts[r + 1]);
        for idx in start..next_start {
            let p = idx - start;
            matches[idx].next_match = Some(matches[next_start + p / 2].id);
        }
    }

    // Advance first-round walkovers (and any single-feeder walkovers they trigger).
    for (idx, entrant) in byes {
        let Some(next_id) = matches[idx].next_match else {
            continue;
        };
        let ni = round_starts[1] + idx / 2;
        debug_assert_eq!(matches[ni].id, next_id);
        matches[ni] = advance(&matches[ni], None, entrant)?;
        cascade_walkovers(&mut matches, ni, None, rules, &mut Vec::new())?;
    }

    log::debug!(
        "built bracket for tournament {}: {} teams, {} rounds, {} matches",
        tournament_id,
        team_ids.len(),
        total_rounds,
        matches.len()
    );
    Ok(matches)
}

fn knockout_label(round: u32, matches_in_round: usize) -> RoundLabel {
    RoundLabel::Knockout {
        round,
        name: knockout_round_name(matches_in_round).map(str::to_string),
    }
}
