use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::player::{PlayerAttributes, PlayerCard};

/// Element-wise totals (or, after [`TeamStats::rounded_mean`], per-player
/// means) of the six skills and overall across a team.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct TeamStats {
    pub pace: u32,
    pub shooting: u32,
    pub passing: u32,
    pub dribbling: u32,
    pub defense: u32,
    pub physical: u32,
    pub overall: u32,
}

impl TeamStats {
    pub fn add(&mut self, attrs: &PlayerAttributes) {
        self.pace += attrs.pace as u32;
        self.shooting += attrs.shooting as u32;
        self.passing += attrs.passing as u32;
        self.dribbling += attrs.dribbling as u32;
        self.defense += attrs.defense as u32;
        self.physical += attrs.physical as u32;
        self.overall += attrs.overall as u32;
    }

    /// Copy of these totals with one more player added.
    pub fn with(mut self, attrs: &PlayerAttributes) -> Self {
        self.add(attrs);
        self
    }

    /// Per-player mean of each total, rounded to the nearest integer
    /// (halves up). An empty team yields all zeros.
    pub fn rounded_mean(&self, members: usize) -> TeamStats {
        if members == 0 {
            return TeamStats::default();
        }
        let n = members as u32;
        let round = |sum: u32| (sum * 2 + n) / (n * 2);
        TeamStats {
            pace: round(self.pace),
            shooting: round(self.shooting),
            passing: round(self.passing),
            dribbling: round(self.dribbling),
            defense: round(self.defense),
            physical: round(self.physical),
            overall: round(self.overall),
        }
    }
}

/// One side of a two-team split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub players: Vec<PlayerCard>,
    /// Mean overall rounded to one decimal, 0 for an empty team.
    pub average_rating: f64,
    /// Raw totals, unrounded.
    pub stats: TeamStats,
}

impl TeamResult {
    pub fn empty() -> Self {
        Self { players: Vec::new(), average_rating: 0.0, stats: TeamStats::default() }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.id.as_str())
    }
}

/// Output of the two-team variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResult {
    pub team_a: TeamResult,
    pub team_b: TeamResult,
    /// Imbalance score of the returned split (lower is better).
    pub imbalance_score: u32,
}

impl BalanceResult {
    pub fn empty() -> Self {
        Self { team_a: TeamResult::empty(), team_b: TeamResult::empty(), imbalance_score: 0 }
    }
}

/// One team of an N-team draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamAssignment {
    pub index: usize,
    pub name: String,
    pub players: Vec<PlayerCard>,
    /// Rounded per-player means, all zero for an empty team.
    pub total_stats: TeamStats,
}

impl TeamAssignment {
    pub fn player_ids(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.id.as_str())
    }
}
