//! Group draw: partition the entrants into round-robin groups.

use crate::models::{Group, TeamId, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Letter name for the `index`-th group: A..Z, then AA, AB, ...
pub fn group_name(index: usize) -> String {
    let mut n = index + 1;
    let mut name = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

/// Shuffle `team_ids` and deal them one by one into `group_count` groups.
///
/// Group sizes differ by at most one. Every group gets at least two teams,
/// so `group_count` must be between 1 and half the number of teams.
pub fn draw_groups<R: Rng + ?Sized>(
    team_ids: &[TeamId],
    group_count: usize,
    rng: &mut R,
) -> Result<Vec<Group>, TournamentError> {
    if group_count == 0 || group_count > team_ids.len() / 2 {
        return Err(TournamentError::InvalidGroupCount {
            groups: group_count,
            teams: team_ids.len(),
        });
    }
    let mut seen = HashSet::new();
    if let Some(&dup) = team_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(TournamentError::DuplicateTeam(dup));
    }

    let mut pool = team_ids.to_vec();
    pool.shuffle(rng);

    let mut groups: Vec<Group> = (0..group_count)
        .map(|i| Group::new(group_name(i), Vec::new()))
        .collect();
    for (i, id) in pool.into_iter().enumerate() {
        groups[i % group_count].team_ids.push(id);
    }
    log::debug!(
        "drew {} teams into {} groups",
        team_ids.len(),
        group_count
    );
    Ok(groups)
}
