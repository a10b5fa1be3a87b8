//! Fixture engine logic: schedules, result entry, tables and leaderboards.

mod bracket;
mod calendar;
mod groups;
mod regenerate;
mod results;
mod round_robin;
mod standings;
mod statistics;

pub use bracket::{bracket_rounds, build_bracket, knockout_round_name};
pub use calendar::assign_dates;
pub use groups::{draw_groups, group_name};
pub use regenerate::extend_round_robin;
pub use results::{
    apply_result, cancel_match, record_result, start_match, ResultOutcome, ResultReport,
};
pub use round_robin::{build_group_stage, build_round_robin, circle_pairings};
pub use standings::{compute_standings, group_standings};
pub use statistics::{discipline, fewest_conceded, team_report, top_scorers};
