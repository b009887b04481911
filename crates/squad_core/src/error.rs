use thiserror::Error;

use crate::balance::MAX_TEAMS;
use crate::player::fusion::{FUSION_MAX_CARDS, FUSION_MIN_CARDS};

/// Errors surfaced by the balancer and the layers around it.
///
/// The two-team split never fails; only the N-team draft, strategy
/// selection and the JSON API return these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Invalid team count: {requested}. Must be between 1 and {}", MAX_TEAMS)]
    InvalidTeamCount { requested: usize },

    #[error("Fusion needs {}..={} cards, got {count}", FUSION_MIN_CARDS, FUSION_MAX_CARDS)]
    InvalidFusion { count: usize },

    #[error("Strategy {strategy} cannot build {teams} teams (randomized search only splits into 2)")]
    StrategyUnsupported { strategy: String, teams: usize },

    #[error("Invalid balance config: {0}")]
    InvalidConfig(String),

    #[error("Invalid player: {0}")]
    InvalidPlayer(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for BalanceError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            BalanceError::Deserialization(err.to_string())
        } else {
            BalanceError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, BalanceError>;
