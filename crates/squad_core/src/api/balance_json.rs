//! JSON API for team balancing
//!
//! The surrounding app sends a roster plus the wanted split and gets the
//! teams back with camelCase field names (`teamA`, `averageRating`,
//! `totalStats`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::balance::{BalanceConfig, TeamBalancer};
use crate::error::{BalanceError, Result};
use crate::models::{BalanceResult, PlayerCard, TeamAssignment};
use crate::player::PlayerValidator;
use crate::SCHEMA_VERSION;

/// 팀 밸런싱 요청
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BalanceRequest {
    pub schema_version: u8,
    pub players: Vec<PlayerCard>,
    pub mode: BalanceMode,
    /// Overrides `config.seed` when present
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub config: Option<BalanceConfig>,
}

impl BalanceRequest {
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(BalanceRequest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BalanceMode {
    /// Two teams with per-team average rating
    TwoTeams,
    /// Any number of teams with rounded mean stats, split by the
    /// configured strategy (`auto` searches when exactly two are asked for)
    NTeams { number_of_teams: usize },
}

/// 팀 밸런싱 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BalanceResponse {
    pub schema_version: u8,
    pub success: bool,
    pub result: Option<BalanceOutcome>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BalanceOutcome {
    TwoTeams(BalanceResult),
    NTeams { teams: Vec<TeamAssignment> },
}

/// Run a typed request: schema check, config check, roster validation,
/// then the requested variant.
pub fn balance_request(request: &BalanceRequest) -> Result<BalanceOutcome> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(BalanceError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let mut config = request.config.clone().unwrap_or_default();
    if let Some(seed) = request.seed {
        config.seed = Some(seed);
    }
    let balancer = TeamBalancer::new(config)?;

    PlayerValidator::validate_roster(&request.players)?;

    match request.mode {
        BalanceMode::TwoTeams => {
            let mut rng = balancer.rng();
            Ok(BalanceOutcome::TwoTeams(balancer.two_teams(&request.players, &mut rng)))
        }
        BalanceMode::NTeams { number_of_teams } => {
            let teams = balancer.balance_seeded(&request.players, number_of_teams)?;
            Ok(BalanceOutcome::NTeams { teams })
        }
    }
}

/// JSON in, JSON out. Rejected input comes back as `success: false` with
/// the reason; only an unreadable request envelope is an `Err`.
pub fn balance_teams_json(request_json: &str) -> Result<String> {
    let request: BalanceRequest = serde_json::from_str(request_json)?;
    debug!(roster = request.players.len(), mode = ?request.mode, "balance request");

    let response = match balance_request(&request) {
        Ok(outcome) => BalanceResponse {
            schema_version: SCHEMA_VERSION,
            success: true,
            result: Some(outcome),
            error_message: None,
        },
        Err(err) => {
            warn!(error = %err, "balance request rejected");
            BalanceResponse {
                schema_version: SCHEMA_VERSION,
                success: false,
                result: None,
                error_message: Some(err.to_string()),
            }
        }
    };

    Ok(serde_json::to_string(&response)?)
}
