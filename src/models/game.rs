//! Match (game), its status, round label and sides.

use crate::models::event::MatchEvents;
use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One of the two participant slots of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    A,
    B,
}

/// Lifecycle of a match. `Finished` matches feed the tables.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

/// Which stage a match belongs to, and how to call its round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundLabel {
    /// Round-robin round, numbered per group.
    GroupStage { matchday: u32 },
    /// Bracket round; `name` is e.g. "Semifinal" when the round size has a conventional name.
    Knockout { round: u32, name: Option<String> },
}

impl RoundLabel {
    pub fn is_knockout(&self) -> bool {
        matches!(self, RoundLabel::Knockout { .. })
    }
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundLabel::GroupStage { matchday } => write!(f, "Matchday {}", matchday),
            RoundLabel::Knockout {
                name: Some(name), ..
            } => write!(f, "{}", name),
            RoundLabel::Knockout { round, name: None } => write!(f, "Round {}", round),
        }
    }
}

/// A single fixture between two teams (either slot may still be TBD in a bracket).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    /// 1-based round (matchday within a group, or bracket round).
    pub round: u32,
    pub label: RoundLabel,
    /// 1-based position within the round.
    pub position: u32,
    pub side_a: Option<TeamId>,
    pub side_b: Option<TeamId>,
    /// None until finished.
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub status: MatchStatus,
    /// Bracket match the winner advances to; None for the final and round-robin matches.
    pub next_match: Option<MatchId>,
    /// Previous-round matches feeding this one (0 for first-round and group matches).
    pub feeders: u8,
    /// Round-robin group; None in a bracket.
    pub group: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub events: MatchEvents,
}

impl GameMatch {
    /// A scheduled match with no score and no bracket link.
    pub fn new(
        tournament_id: TournamentId,
        round: u32,
        label: RoundLabel,
        position: u32,
        side_a: Option<TeamId>,
        side_b: Option<TeamId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round,
            label,
            position,
            side_a,
            side_b,
            score_a: None,
            score_b: None,
            status: MatchStatus::Scheduled,
            next_match: None,
            feeders: 0,
            group: None,
            scheduled_at: None,
            events: MatchEvents::default(),
        }
    }

    pub fn with_group(mut self, group: Option<&str>) -> Self {
        self.group = group.map(str::to_string);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn participant(&self, side: Side) -> Option<TeamId> {
        match side {
            Side::A => self.side_a,
            Side::B => self.side_b,
        }
    }

    /// Both participants, if both slots are filled.
    pub fn participants(&self) -> Option<(TeamId, TeamId)> {
        Some((self.side_a?, self.side_b?))
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.side_a == Some(team_id) || self.side_b == Some(team_id)
    }

    /// Side holding the given team, A checked first.
    pub fn side_of(&self, team_id: TeamId) -> Option<Side> {
        if self.side_a == Some(team_id) {
            Some(Side::A)
        } else if self.side_b == Some(team_id) {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Winning side of a finished match; None if unfinished or level.
    pub fn winning_side(&self) -> Option<Side> {
        if !self.is_finished() {
            return None;
        }
        match (self.score_a?, self.score_b?) {
            (a, b) if a > b => Some(Side::A),
            (a, b) if b > a => Some(Side::B),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<TeamId> {
        self.winning_side().and_then(|s| self.participant(s))
    }

    /// Goals (scored, conceded) from the point of view of `team_id`, if it played and the match is finished.
    pub fn goals_for_team(&self, team_id: TeamId) -> Option<(u32, u32)> {
        if !self.is_finished() {
            return None;
        }
        let (a, b) = (self.score_a?, self.score_b?);
        match self.side_of(team_id)? {
            Side::A => Some((a, b)),
            Side::B => Some((b, a)),
        }
    }

    /// Opponent of `team_id` in this match.
    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        match self.side_of(team_id)? {
            Side::A => self.side_b,
            Side::B => self.side_a,
        }
    }
}
