//! Match storage seen by the engine. Persistence technology is the implementor's concern.

use crate::models::{GameMatch, MatchId, TournamentError, TournamentId};

/// List, create, update and delete matches by id.
pub trait MatchStore {
    /// All matches of a tournament, in creation order.
    fn list_matches(&self, tournament_id: TournamentId) -> Vec<GameMatch>;

    fn get_match(&self, id: MatchId) -> Option<GameMatch>;

    fn create_match(&mut self, game: GameMatch) -> Result<(), TournamentError>;

    fn update_match(&mut self, game: GameMatch) -> Result<(), TournamentError>;

    fn delete_match(&mut self, id: MatchId) -> Result<GameMatch, TournamentError>;

    fn list_group_matches(&self, tournament_id: TournamentId, group: &str) -> Vec<GameMatch> {
        self.list_matches(tournament_id)
            .into_iter()
            .filter(|m| m.group.as_deref() == Some(group))
            .collect()
    }
}

/// Vec-backed store, keeping creation order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMatchStore {
    matches: Vec<GameMatch>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn list_matches(&self, tournament_id: TournamentId) -> Vec<GameMatch> {
        self.matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id)
            .cloned()
            .collect()
    }

    fn get_match(&self, id: MatchId) -> Option<GameMatch> {
        self.matches.iter().find(|m| m.id == id).cloned()
    }

    fn create_match(&mut self, game: GameMatch) -> Result<(), TournamentError> {
        if self.matches.iter().any(|m| m.id == game.id) {
            return Err(TournamentError::DuplicateMatch(game.id));
        }
        self.matches.push(game);
        Ok(())
    }

    fn update_match(&mut self, game: GameMatch) -> Result<(), TournamentError> {
        let slot = self
            .matches
            .iter_mut()
            .find(|m| m.id == game.id)
            .ok_or(TournamentError::MatchNotFound(game.id))?;
        *slot = game;
        Ok(())
    }

    fn delete_match(&mut self, id: MatchId) -> Result<GameMatch, TournamentError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(TournamentError::MatchNotFound(id))?;
        Ok(self.matches.remove(idx))
    }
}
