//! Tournament, its format, and the engine's error type.

use crate::models::game::MatchId;
use crate::models::team::{Group, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Broad category of a failure, for callers mapping errors onto their own surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidState,
    Conflict,
    UnsupportedOperation,
    NotFound,
}

/// Errors that can occur during fixture and result operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Too few teams to build a schedule.
    #[error("Need at least {required} teams, got {actual}")]
    NotEnoughTeams { required: usize, actual: usize },
    /// The same team was listed twice.
    #[error("Team {0} is listed more than once")]
    DuplicateTeam(TeamId),
    /// Group layout does not fit the tournament's teams.
    #[error("Invalid groups: {0}")]
    InvalidGroups(String),
    /// Group draw asked for an impossible number of groups.
    #[error("Cannot draw {groups} groups from {teams} teams")]
    InvalidGroupCount { groups: usize, teams: usize },
    /// A knockout match cannot finish level; the caller must decide it.
    #[error("Knockout match {0} cannot end in a draw")]
    UndecidedKnockout(MatchId),
    /// A match slot is still TBD.
    #[error("Match {0} does not have both participants yet")]
    MissingParticipant(MatchId),
    /// Status transition not allowed (e.g. scoring a cancelled match).
    #[error("Match {0} cannot move from its current status")]
    InvalidTransition(MatchId),
    /// The supplied next match is not the one this match links to.
    #[error("Match {0} is not linked to the supplied next match")]
    WrongNextMatch(MatchId),
    /// Fixtures were already generated for this tournament.
    #[error("Tournament {0} already has fixtures")]
    FixturesExist(TournamentId),
    /// Propagation would overwrite an already-decided downstream match.
    #[error("Match {next} is already decided with team {occupant} in the slot being replaced")]
    Conflict { next: MatchId, occupant: TeamId },
    /// Elimination brackets are fixed at creation.
    #[error("Elimination brackets cannot be regenerated; recreate the tournament instead")]
    BracketRegeneration,
    /// Entrants of an elimination bracket are fixed at creation.
    #[error("Teams cannot withdraw from an elimination bracket once it is drawn")]
    BracketWithdrawal,
    /// A kick-off date falls outside the representable calendar.
    #[error("Kick-off date for round {round} is out of range")]
    DateOutOfRange { round: u32 },
    #[error("Match {0} already exists")]
    DuplicateMatch(MatchId),
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    #[error("Team {0} not found")]
    TeamNotFound(TeamId),
    #[error("Invalid rules: {0}")]
    Rules(#[from] serde_json::Error),
    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            NotEnoughTeams { .. }
            | DuplicateTeam(_)
            | InvalidGroups(_)
            | InvalidGroupCount { .. }
            | UndecidedKnockout(_)
            | WrongNextMatch(_)
            | DuplicateMatch(_)
            | Rules(_)
            | InvalidRules(_)
            | DateOutOfRange { .. } => ErrorKind::InvalidInput,
            MissingParticipant(_) | InvalidTransition(_) | FixturesExist(_) => {
                ErrorKind::InvalidState
            }
            Conflict { .. } => ErrorKind::Conflict,
            BracketRegeneration | BracketWithdrawal => ErrorKind::UnsupportedOperation,
            MatchNotFound(_) | TeamNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// How the tournament's fixtures are built.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Everyone plays everyone once.
    #[default]
    League,
    /// Single-elimination bracket.
    Knockout,
    /// Round robin inside each group.
    Groups,
}

impl TournamentFormat {
    pub fn is_elimination(self) -> bool {
        self == TournamentFormat::Knockout
    }
}

/// Tournament definition: entrants, optional groups and format.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    /// Entrants in seeding order.
    pub teams: Vec<TeamId>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Create a tournament with no teams.
    pub fn new(name: impl Into<String>, format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            teams: Vec::new(),
            groups: Vec::new(),
            start_date: None,
        }
    }

    /// Create a tournament with initial entrants. Duplicates are rejected.
    pub fn with_teams(
        name: impl Into<String>,
        format: TournamentFormat,
        teams: Vec<TeamId>,
    ) -> Result<Self, TournamentError> {
        let mut t = Self::new(name, format);
        for id in teams {
            t.add_team(id)?;
        }
        Ok(t)
    }

    pub fn add_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        if self.teams.contains(&team_id) {
            return Err(TournamentError::DuplicateTeam(team_id));
        }
        self.teams.push(team_id);
        Ok(())
    }

    /// Remove a team from the entrants and from whichever group holds it.
    /// Existing matches are left alone; they belong to the match store.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        let idx = self
            .teams
            .iter()
            .position(|&t| t == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        for g in &mut self.groups {
            g.team_ids.retain(|&t| t != team_id);
        }
        Ok(())
    }

    /// Replace the group layout. Every grouped team must be an entrant, at most once overall.
    pub fn set_groups(&mut self, groups: Vec<Group>) -> Result<(), TournamentError> {
        let mut seen = HashSet::new();
        let mut names = HashSet::new();
        for g in &groups {
            if g.name.trim().is_empty() {
                return Err(TournamentError::InvalidGroups("group name is empty".into()));
            }
            if !names.insert(g.name.as_str()) {
                return Err(TournamentError::InvalidGroups(format!(
                    "group {} is defined twice",
                    g.name
                )));
            }
            for &id in &g.team_ids {
                if !self.teams.contains(&id) {
                    return Err(TournamentError::TeamNotFound(id));
                }
                if !seen.insert(id) {
                    return Err(TournamentError::InvalidGroups(format!(
                        "team {} is in more than one group",
                        id
                    )));
                }
            }
        }
        self.groups = groups;
        Ok(())
    }

    /// Groups to schedule: the defined groups, or one implicit group holding every team.
    pub fn fixture_groups(&self, default_group_name: &str) -> Vec<Group> {
        if self.groups.is_empty() {
            vec![Group::new(default_group_name, self.teams.clone())]
        } else {
            self.groups.clone()
        }
    }
}
