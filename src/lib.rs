//! Tournament fixture engine: bracket and round-robin schedules, result propagation,
//! group standings and leaderboards, over in-memory match data.

pub mod config;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::Rules;
pub use logic::{
    apply_result, assign_dates, bracket_rounds, build_bracket, build_group_stage,
    build_round_robin, cancel_match, circle_pairings, compute_standings, discipline, draw_groups,
    extend_round_robin, fewest_conceded, group_name, group_standings, knockout_round_name,
    record_result, start_match, team_report, top_scorers, ResultOutcome, ResultReport,
};
pub use models::{
    CardEntry, CardEvent, CardKind, ConcededEntry, ErrorKind, FormResult, GameMatch,
    GoalsReceived, Group, GroupStandings, MatchEvents, MatchId, MatchStatus, RoundLabel,
    ScorerEntry, ScorerEvent, Side, StandingRow, Team, TeamId, TeamReport, Tournament,
    TournamentError, TournamentFormat, TournamentId,
};
pub use service::FixtureService;
pub use store::{InMemoryMatchStore, MatchStore};
