//! Leaderboards from finished matches: scorers, defences, cards, and per-team reports.

use crate::models::{
    CardEntry, CardEvent, CardKind, ConcededEntry, GameMatch, GoalsReceived, MatchStatus,
    ScorerEntry, ScorerEvent, Side, TeamId, TeamReport,
};
use std::collections::HashMap;

/// Scorer events of one side, tagged with that side's team.
fn side_scorers(m: &GameMatch, side: Side) -> impl Iterator<Item = (Option<TeamId>, &ScorerEvent)> {
    let events = match side {
        Side::A => &m.events.scorers_a,
        Side::B => &m.events.scorers_b,
    };
    let team = m.participant(side);
    events.iter().map(move |e| (team, e))
}

fn side_cards(m: &GameMatch, side: Side) -> impl Iterator<Item = (Option<TeamId>, &CardEvent)> {
    let events = match side {
        Side::A => &m.events.cards_a,
        Side::B => &m.events.cards_b,
    };
    let team = m.participant(side);
    events.iter().map(move |e| (team, e))
}

fn tally_scorers<'a>(
    events: impl Iterator<Item = (Option<TeamId>, &'a ScorerEvent)>,
) -> Vec<ScorerEntry> {
    let mut entries: Vec<ScorerEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (team_id, event) in events {
        let Some(key) = event.player_key() else {
            continue;
        };
        let i = *index.entry(key.clone()).or_insert_with(|| {
            entries.push(ScorerEntry {
                player_key: key,
                name: event.display_name(),
                team_id,
                goals: 0,
            });
            entries.len() - 1
        });
        entries[i].goals = entries[i].goals.saturating_add(event.goals());
    }
    entries.retain(|e| e.goals > 0);
    entries.sort_by(|a, b| b.goals.cmp(&a.goals));
    entries
}

fn tally_cards<'a>(events: impl Iterator<Item = (Option<TeamId>, &'a CardEvent)>) -> Vec<CardEntry> {
    let mut entries: Vec<CardEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (team_id, event) in events {
        let Some(key) = event.player_key() else {
            continue;
        };
        let i = *index.entry(key.clone()).or_insert_with(|| {
            entries.push(CardEntry {
                player_key: key,
                name: event.display_name(),
                team_id,
                ..CardEntry::default()
            });
            entries.len() - 1
        });
        let entry = &mut entries[i];
        match event.card {
            CardKind::Yellow => entry.yellow = entry.yellow.saturating_add(1),
            CardKind::Red => entry.red = entry.red.saturating_add(1),
            CardKind::Blue => entry.blue = entry.blue.saturating_add(1),
        }
    }
    entries.sort_by(|a, b| {
        b.red
            .cmp(&a.red)
            .then(b.yellow.cmp(&a.yellow))
            .then(b.blue.cmp(&a.blue))
    });
    entries
}

/// Goals per player over finished matches, most first (ties keep first-seen order).
///
/// Players are keyed by trimmed, case-insensitive id-or-name, so "X" and " x "
/// are the same scorer.
pub fn top_scorers(matches: &[GameMatch]) -> Vec<ScorerEntry> {
    tally_scorers(
        matches
            .iter()
            .filter(|m| m.is_finished())
            .flat_map(|m| side_scorers(m, Side::A).chain(side_scorers(m, Side::B))),
    )
}

/// Teams with at least one finished match, best defence first.
///
/// Ordered by goals conceded per match ascending, then total conceded ascending,
/// then matches played descending.
pub fn fewest_conceded(team_ids: &[TeamId], matches: &[GameMatch]) -> Vec<ConcededEntry> {
    let mut entries: Vec<ConcededEntry> = team_ids
        .iter()
        .filter_map(|&team_id| {
            let (played, against) = matches
                .iter()
                .filter_map(|m| m.goals_for_team(team_id))
                .fold((0u32, 0u32), |(p, ga), (_, conceded)| {
                    (p.saturating_add(1), ga.saturating_add(conceded))
                });
            (played > 0).then(|| ConcededEntry {
                team_id,
                matches_played: played,
                goals_against: against,
                average: f64::from(against) / f64::from(played),
            })
        })
        .collect();
    entries.sort_by(|a, b| {
        a.average
            .total_cmp(&b.average)
            .then(a.goals_against.cmp(&b.goals_against))
            .then(b.matches_played.cmp(&a.matches_played))
    });
    entries
}

/// Cards per player over finished matches: most reds first, then yellows, then blues.
pub fn discipline(matches: &[GameMatch]) -> Vec<CardEntry> {
    tally_cards(
        matches
            .iter()
            .filter(|m| m.is_finished())
            .flat_map(|m| side_cards(m, Side::A).chain(side_cards(m, Side::B))),
    )
}

/// Completed and pending fixtures, own scorers, goals let in and cards for one team.
pub fn team_report(team_id: TeamId, matches: &[GameMatch]) -> TeamReport {
    let own: Vec<(&GameMatch, Side)> = matches
        .iter()
        .filter_map(|m| m.side_of(team_id).map(|side| (m, side)))
        .collect();
    let finished = || own.iter().filter(|(m, _)| m.is_finished());

    TeamReport {
        team_id,
        completed: finished().map(|(m, _)| m.id).collect(),
        pending: own
            .iter()
            .filter(|(m, _)| matches!(m.status, MatchStatus::Scheduled | MatchStatus::InProgress))
            .map(|(m, _)| m.id)
            .collect(),
        scorers: tally_scorers(finished().flat_map(|&(m, side)| side_scorers(m, side))),
        goals_received: finished()
            .filter_map(|&(m, _)| {
                let (_, conceded) = m.goals_for_team(team_id)?;
                Some(GoalsReceived {
                    match_id: m.id,
                    opponent: m.opponent_of(team_id),
                    goals: conceded,
                    label: m.label.clone(),
                    group: m.group.clone(),
                })
            })
            .collect(),
        cards: tally_cards(finished().flat_map(|&(m, side)| side_cards(m, side))),
    }
}
