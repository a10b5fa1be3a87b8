//! Data structures for the fixture engine: teams, matches, tournaments, derived tables.

mod event;
mod game;
mod standing;
mod team;
mod tournament;

pub use event::{CardEvent, CardKind, MatchEvents, ScorerEvent};
pub use game::{GameMatch, MatchId, MatchStatus, RoundLabel, Side};
pub use standing::{
    CardEntry, ConcededEntry, FormResult, GoalsReceived, GroupStandings, ScorerEntry,
    StandingRow, TeamReport,
};
pub use team::{Group, Team, TeamId};
pub use tournament::{ErrorKind, Tournament, TournamentError, TournamentFormat, TournamentId};
