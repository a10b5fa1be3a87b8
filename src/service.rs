//! Fixture operations over a `MatchStore`.
//!
//! Mutating methods take `&mut self`, so a service instance is the single writer
//! for the tournaments it manages. Wrap it in a lock (one per tournament or one
//! overall) when sharing it between request handlers.
//!
//! Inputs are validated before the store is touched, but the store writes
//! themselves are not transactional: if a `MatchStore` call fails midway, the
//! writes made before it stay in place and the error is returned.

use crate::config::Rules;
use crate::logic::{
    assign_dates, build_bracket, build_group_stage, cancel_match, discipline, extend_round_robin,
    fewest_conceded, group_standings, record_result, start_match, team_report, top_scorers,
    ResultReport,
};
use crate::models::{
    CardEntry, ConcededEntry, GameMatch, GroupStandings, MatchId, MatchStatus, ScorerEntry,
    TeamId, TeamReport, Tournament, TournamentError, TournamentFormat, TournamentId,
};
use crate::store::MatchStore;
use chrono::Duration;

pub struct FixtureService<S: MatchStore> {
    store: S,
    rules: Rules,
}

impl<S: MatchStore> FixtureService<S> {
    pub fn new(store: S, rules: Rules) -> Self {
        Self { store, rules }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Create the tournament's fixtures: a bracket for knockout, round robins otherwise.
    pub fn generate(&mut self, tournament: &Tournament) -> Result<Vec<GameMatch>, TournamentError> {
        self.rules.validate()?;
        if !self.store.list_matches(tournament.id).is_empty() {
            return Err(TournamentError::FixturesExist(tournament.id));
        }
        let mut matches = match tournament.format {
            TournamentFormat::Knockout => build_bracket(tournament.id, &tournament.teams, &self.rules)?,
            TournamentFormat::League | TournamentFormat::Groups => {
                build_group_stage(tournament, &self.rules)?
            }
        };
        self.schedule(tournament, &mut matches)?;
        for m in &matches {
            self.store.create_match(m.clone())?;
        }
        log::info!(
            "generated {} matches for tournament {} ({:?})",
            matches.len(),
            tournament.name,
            tournament.format
        );
        Ok(matches)
    }

    /// Add fixtures for pairs that do not have one yet (after teams or groups changed).
    pub fn regenerate(&mut self, tournament: &Tournament) -> Result<Vec<GameMatch>, TournamentError> {
        self.rules.validate()?;
        let existing = self.store.list_matches(tournament.id);
        let mut fresh = extend_round_robin(&existing, tournament, &self.rules)?;
        self.schedule(tournament, &mut fresh)?;
        for m in &fresh {
            self.store.create_match(m.clone())?;
        }
        log::info!(
            "regenerated tournament {}: {} new matches",
            tournament.name,
            fresh.len()
        );
        Ok(fresh)
    }

    /// Take a team out of a round-robin tournament, deleting its unplayed fixtures.
    /// Finished matches stay in the store but no longer count in its group's table.
    /// The roster changes only after every fixture is deleted.
    pub fn withdraw_team(
        &mut self,
        tournament: &mut Tournament,
        team_id: TeamId,
    ) -> Result<Vec<MatchId>, TournamentError> {
        if tournament.format.is_elimination() {
            return Err(TournamentError::BracketWithdrawal);
        }
        if !tournament.teams.contains(&team_id) {
            return Err(TournamentError::TeamNotFound(team_id));
        }
        let doomed: Vec<MatchId> = self
            .store
            .list_matches(tournament.id)
            .into_iter()
            .filter(|m| m.involves(team_id))
            .filter(|m| matches!(m.status, MatchStatus::Scheduled | MatchStatus::InProgress))
            .map(|m| m.id)
            .collect();
        for &id in &doomed {
            self.store.delete_match(id)?;
        }
        tournament.remove_team(team_id)?;
        log::info!(
            "withdrew team {} from {}: {} fixtures removed",
            team_id,
            tournament.name,
            doomed.len()
        );
        Ok(doomed)
    }

    /// Score a match and persist every match the result touched (scored match first).
    pub fn submit_result(
        &mut self,
        match_id: MatchId,
        report: ResultReport,
    ) -> Result<Vec<GameMatch>, TournamentError> {
        let game = self
            .store
            .get_match(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        let mut matches = self.store.list_matches(game.tournament_id);
        let changed = record_result(&mut matches, match_id, report, &self.rules)?;

        let updated: Vec<GameMatch> = changed
            .iter()
            .filter_map(|id| matches.iter().find(|m| m.id == *id).cloned())
            .collect();
        for m in &updated {
            self.store.update_match(m.clone())?;
        }
        log::info!(
            "result for match {} saved, {} matches updated",
            match_id,
            updated.len()
        );
        Ok(updated)
    }

    pub fn start_match(&mut self, match_id: MatchId) -> Result<GameMatch, TournamentError> {
        self.transition(match_id, start_match)
    }

    pub fn cancel_match(&mut self, match_id: MatchId) -> Result<GameMatch, TournamentError> {
        self.transition(match_id, cancel_match)
    }

    /// Group tables. Empty for knockout tournaments, which have no table.
    pub fn standings(&self, tournament: &Tournament) -> Vec<GroupStandings> {
        if tournament.format.is_elimination() {
            return Vec::new();
        }
        let matches = self.store.list_matches(tournament.id);
        group_standings(tournament, &matches, &self.rules)
    }

    /// Top scorers, cut to `Rules::top_scorers_limit`.
    pub fn top_scorers(&self, tournament_id: TournamentId) -> Vec<ScorerEntry> {
        let mut scorers = top_scorers(&self.store.list_matches(tournament_id));
        if let Some(limit) = self.rules.top_scorers_limit {
            scorers.truncate(limit);
        }
        scorers
    }

    pub fn fewest_conceded(&self, tournament: &Tournament) -> Vec<ConcededEntry> {
        fewest_conceded(&tournament.teams, &self.store.list_matches(tournament.id))
    }

    pub fn discipline(&self, tournament_id: TournamentId) -> Vec<CardEntry> {
        discipline(&self.store.list_matches(tournament_id))
    }

    pub fn team_report(&self, tournament_id: TournamentId, team_id: TeamId) -> TeamReport {
        team_report(team_id, &self.store.list_matches(tournament_id))
    }

    fn schedule(
        &self,
        tournament: &Tournament,
        matches: &mut [GameMatch],
    ) -> Result<(), TournamentError> {
        let Some(start) = tournament.start_date else {
            return Ok(());
        };
        let interval = Duration::try_days(self.rules.matchday_interval_days).ok_or_else(|| {
            TournamentError::InvalidRules(format!(
                "matchday interval of {} days is out of range",
                self.rules.matchday_interval_days
            ))
        })?;
        assign_dates(matches, start, interval)
    }

    fn transition(
        &mut self,
        match_id: MatchId,
        step: fn(&mut GameMatch) -> Result<(), TournamentError>,
    ) -> Result<GameMatch, TournamentError> {
        let mut game = self
            .store
            .get_match(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        step(&mut game)?;
        self.store.update_match(game.clone())?;
        Ok(game)
    }
}
