//! Scorer and card events recorded against a match side.

use serde::{Deserialize, Serialize};

/// A goal (or several) credited to one player.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScorerEvent {
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub minute: Option<u32>,
    /// Goals this entry stands for; absent means one.
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl ScorerEvent {
    /// A single goal by a player known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            player_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn goals(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    /// Aggregation key: trimmed, lowercased player id, falling back to the name.
    pub fn player_key(&self) -> Option<String> {
        player_key(self.player_id.as_deref(), self.player_name.as_deref())
    }

    /// Display name: the recorded name, falling back to the id.
    pub fn display_name(&self) -> String {
        display_name(self.player_id.as_deref(), self.player_name.as_deref())
    }
}

/// Card colours. Blue is the futsal/amateur temporary suspension card.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    #[default]
    Yellow,
    Red,
    Blue,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardEvent {
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    pub card: CardKind,
    #[serde(default)]
    pub minute: Option<u32>,
}

impl CardEvent {
    pub fn named(name: impl Into<String>, card: CardKind) -> Self {
        Self {
            player_name: Some(name.into()),
            card,
            ..Self::default()
        }
    }

    pub fn player_key(&self) -> Option<String> {
        player_key(self.player_id.as_deref(), self.player_name.as_deref())
    }

    pub fn display_name(&self) -> String {
        display_name(self.player_id.as_deref(), self.player_name.as_deref())
    }
}

/// Per-side event lists of one match. Opaque to scheduling; read by the aggregators.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchEvents {
    #[serde(default)]
    pub scorers_a: Vec<ScorerEvent>,
    #[serde(default)]
    pub scorers_b: Vec<ScorerEvent>,
    #[serde(default)]
    pub cards_a: Vec<CardEvent>,
    #[serde(default)]
    pub cards_b: Vec<CardEvent>,
}

fn player_key(id: Option<&str>, name: Option<&str>) -> Option<String> {
    [id, name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn display_name(id: Option<&str>, name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| id.map(str::trim))
        .unwrap_or_default()
        .to_string()
}
