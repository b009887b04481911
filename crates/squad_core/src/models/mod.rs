//! Plain data records exchanged with the balancer.

pub mod player;
pub mod team;

pub use player::{PlayerAttributes, PlayerCard, ATTRIBUTE_MAX, ATTRIBUTE_MIN};
pub use team::{BalanceResult, TeamAssignment, TeamResult, TeamStats};
