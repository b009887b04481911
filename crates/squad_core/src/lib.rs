//! # squad_core - Team balancing for pickup football groups
//!
//! Splits a roster of player cards (six skills plus an overall rating)
//! into teams of near-equal strength.
//!
//! ## Features
//! - Two-team split by randomized restart search (seedable)
//! - N-team round-robin (or snake) draft, fully deterministic
//! - Explicit config per call, no global state
//! - Fusion cards averaged from 2-5 players
//! - JSON API for the web front-end

pub mod api;
pub mod balance;
pub mod error;
pub mod models;
pub mod player;

// Re-export main API functions
pub use api::{balance_teams_json, BalanceMode, BalanceOutcome, BalanceRequest, BalanceResponse};
pub use balance::{
    generate_balanced_teams, generate_n_teams, BalanceConfig, DraftOrder, Strategy, TeamBalancer,
};
pub use error::{BalanceError, Result};
pub use models::{BalanceResult, PlayerAttributes, PlayerCard, TeamAssignment, TeamResult, TeamStats};
pub use player::{PlayerRole, PlayerValidator, RoleTier, ValidationError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
