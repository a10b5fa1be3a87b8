//! Scoring and presentation rules.
//!
//! Every field has a default, so an empty JSON object (or no environment at all)
//! yields the usual football rules: 3 points a win, 1 a draw, walkovers 1-0.

use crate::models::TournamentError;
use serde::{Deserialize, Serialize};

/// Longest gap between rounds accepted in `matchday_interval_days`.
pub const MAX_MATCHDAY_INTERVAL_DAYS: i64 = 366;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default = "default_points_for_win")]
    pub points_for_win: u32,
    #[serde(default = "default_points_for_draw")]
    pub points_for_draw: u32,
    #[serde(default)]
    pub points_for_loss: u32,
    /// Score recorded for an automatic walkover, winner first.
    #[serde(default = "default_walkover_score")]
    pub walkover_score: (u32, u32),
    /// Number of recent results kept in a standings row.
    #[serde(default = "default_form_length")]
    pub form_length: usize,
    /// Length of the top-scorer list served by `FixtureService`; None for all.
    #[serde(default = "default_top_scorers_limit")]
    pub top_scorers_limit: Option<usize>,
    /// Group name used when a round-robin tournament defines no groups.
    #[serde(default = "default_group_name")]
    pub default_group_name: String,
    /// Days between rounds when a tournament has a start date.
    #[serde(default = "default_matchday_interval_days")]
    pub matchday_interval_days: i64,
}

fn default_points_for_win() -> u32 {
    3
}

fn default_points_for_draw() -> u32 {
    1
}

fn default_walkover_score() -> (u32, u32) {
    (1, 0)
}

fn default_form_length() -> usize {
    5
}

fn default_top_scorers_limit() -> Option<usize> {
    Some(20)
}

fn default_group_name() -> String {
    "General".to_string()
}

fn default_matchday_interval_days() -> i64 {
    7
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            points_for_win: default_points_for_win(),
            points_for_draw: default_points_for_draw(),
            points_for_loss: 0,
            walkover_score: default_walkover_score(),
            form_length: default_form_length(),
            top_scorers_limit: default_top_scorers_limit(),
            default_group_name: default_group_name(),
            matchday_interval_days: default_matchday_interval_days(),
        }
    }
}

impl Rules {
    /// Parse rules from a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TournamentError> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check the fields that schedule building depends on.
    ///
    /// The walkover score must be a win for the walkover entrant, and the
    /// matchday interval must be within `1..=MAX_MATCHDAY_INTERVAL_DAYS`.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.walkover_score.0 <= self.walkover_score.1 {
            return Err(TournamentError::InvalidRules(format!(
                "walkover score {:?} must favour the walkover winner",
                self.walkover_score
            )));
        }
        if !valid_interval(self.matchday_interval_days) {
            return Err(TournamentError::InvalidRules(format!(
                "matchday interval of {} days is outside 1..={}",
                self.matchday_interval_days, MAX_MATCHDAY_INTERVAL_DAYS
            )));
        }
        Ok(())
    }

    /// Defaults overridden by `FIXTURES_*` environment variables.
    /// Unset, unparsable or out-of-range values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|v| v.trim().parse().ok())
        }

        let defaults = Self::default();
        let top_scorers_limit = match lookup("FIXTURES_TOP_SCORERS_LIMIT") {
            Some(v) if v.trim() == "0" || v.trim().eq_ignore_ascii_case("all") => None,
            Some(v) => v.trim().parse().ok().or(defaults.top_scorers_limit),
            None => defaults.top_scorers_limit,
        };
        Self {
            points_for_win: parsed(&lookup, "FIXTURES_POINTS_FOR_WIN")
                .unwrap_or(defaults.points_for_win),
            points_for_draw: parsed(&lookup, "FIXTURES_POINTS_FOR_DRAW")
                .unwrap_or(defaults.points_for_draw),
            points_for_loss: parsed(&lookup, "FIXTURES_POINTS_FOR_LOSS")
                .unwrap_or(defaults.points_for_loss),
            form_length: parsed(&lookup, "FIXTURES_FORM_LENGTH").unwrap_or(defaults.form_length),
            matchday_interval_days: parsed(&lookup, "FIXTURES_MATCHDAY_INTERVAL_DAYS")
                .filter(|&days| valid_interval(days))
                .unwrap_or(defaults.matchday_interval_days),
            top_scorers_limit,
            ..defaults
        }
    }
}

fn valid_interval(days: i64) -> bool {
    (1..=MAX_MATCHDAY_INTERVAL_DAYS).contains(&days)
}
