//! Player-level helpers that sit beside the balancer:
//! - input validation for the API/CLI boundary
//! - role classification shown on player cards
//! - fusion of several cards into one

pub mod fusion;
pub mod role;
pub mod validation;

pub use fusion::{FUSION_MAX_CARDS, FUSION_MIN_CARDS};
pub use role::{PlayerRole, RoleTier};
pub use validation::{PlayerValidator, ValidationError};
