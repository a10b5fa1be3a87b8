//! Group tables from finished matches.

use crate::config::Rules;
use crate::models::{
    FormResult, GameMatch, GroupStandings, StandingRow, TeamId, Tournament,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranked table for the teams in `group_team_ids`.
///
/// Only finished matches between two teams of the group count. Rows are sorted
/// by points, then goal difference, then goals for (all descending); teams
/// still level keep their order in `group_team_ids`.
pub fn compute_standings(
    group_team_ids: &[TeamId],
    matches: &[GameMatch],
    rules: &Rules,
) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = Vec::with_capacity(group_team_ids.len());
    let mut index: HashMap<TeamId, usize> = HashMap::new();
    for &id in group_team_ids {
        if !index.contains_key(&id) {
            index.insert(id, rows.len());
            rows.push(StandingRow::new(id));
        }
    }

    let mut played: Vec<&GameMatch> = matches
        .iter()
        .filter(|m| m.is_finished())
        .filter(|m| match m.participants() {
            Some((a, b)) => a != b && index.contains_key(&a) && index.contains_key(&b),
            None => false,
        })
        .collect();
    // Form is read oldest first.
    played.sort_by_key(|m| m.round);

    for m in played {
        let (Some((a, b)), Some(score_a), Some(score_b)) = (m.participants(), m.score_a, m.score_b)
        else {
            continue;
        };
        record(&mut rows[index[&a]], score_a, score_b, rules);
        record(&mut rows[index[&b]], score_b, score_a, rules);
    }

    for row in &mut rows {
        row.goal_difference = i64::from(row.goals_for) - i64::from(row.goals_against);
        let excess = row.form.len().saturating_sub(rules.form_length);
        row.form.drain(..excess);
    }

    // sort_by is stable, which keeps residual ties in group order.
    rows.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then(y.goal_difference.cmp(&x.goal_difference))
            .then(y.goals_for.cmp(&x.goals_for))
    });
    rows
}

/// One table per fixture group of `tournament`.
pub fn group_standings(
    tournament: &Tournament,
    matches: &[GameMatch],
    rules: &Rules,
) -> Vec<GroupStandings> {
    tournament
        .fixture_groups(&rules.default_group_name)
        .into_iter()
        .map(|g| GroupStandings {
            rows: compute_standings(&g.team_ids, matches, rules),
            group: g.name,
        })
        .collect()
}

fn record(row: &mut StandingRow, scored: u32, conceded: u32, rules: &Rules) {
    row.played = row.played.saturating_add(1);
    row.goals_for = row.goals_for.saturating_add(scored);
    row.goals_against = row.goals_against.saturating_add(conceded);
    match scored.cmp(&conceded) {
        Ordering::Greater => {
            row.won = row.won.saturating_add(1);
            row.points = row.points.saturating_add(rules.points_for_win);
            row.form.push(FormResult::W);
        }
        Ordering::Equal => {
            row.drawn = row.drawn.saturating_add(1);
            row.points = row.points.saturating_add(rules.points_for_draw);
            row.form.push(FormResult::D);
        }
        Ordering::Less => {
            row.lost = row.lost.saturating_add(1);
            row.points = row.points.saturating_add(rules.points_for_loss);
            row.form.push(FormResult::L);
        }
    }
}
