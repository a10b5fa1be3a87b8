//! Derived tables: standings rows and leaderboard entries. Recomputed on request, never stored.

use crate::models::game::{MatchId, RoundLabel};
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Result of one match from a team's point of view (for the form column).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FormResult {
    W,
    D,
    L,
}

/// One team's line in a group table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: TeamId,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Always `goals_for - goals_against`; filled when the table is computed.
    pub goal_difference: i64,
    pub points: u32,
    /// Most recent results, oldest first.
    pub form: Vec<FormResult>,
}

impl StandingRow {
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            ..Self::default()
        }
    }
}

/// Table for one group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub group: String,
    pub rows: Vec<StandingRow>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScorerEntry {
    /// Normalized player id-or-name.
    pub player_key: String,
    pub name: String,
    /// Team the player first scored for.
    pub team_id: Option<TeamId>,
    pub goals: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConcededEntry {
    pub team_id: TeamId,
    pub matches_played: u32,
    pub goals_against: u32,
    pub average: f64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardEntry {
    pub player_key: String,
    pub name: String,
    pub team_id: Option<TeamId>,
    pub yellow: u32,
    pub red: u32,
    pub blue: u32,
}

impl CardEntry {
    pub fn total(&self) -> u32 {
        self.yellow.saturating_add(self.red).saturating_add(self.blue)
    }
}

/// Goals a team let in during one finished match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GoalsReceived {
    pub match_id: MatchId,
    pub opponent: Option<TeamId>,
    pub goals: u32,
    pub label: RoundLabel,
    pub group: Option<String>,
}

/// Everything the engine can tell about one team's tournament so far.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team_id: TeamId,
    pub completed: Vec<MatchId>,
    pub pending: Vec<MatchId>,
    pub scorers: Vec<ScorerEntry>,
    pub goals_received: Vec<GoalsReceived>,
    pub cards: Vec<CardEntry>,
}
