//! Validation module for player cards
//!
//! The balancer treats attribute ranges as an unchecked precondition, so
//! anything that accepts outside input (JSON API, CLI roster files) runs
//! cards through [`PlayerValidator`] first.

use std::collections::HashSet;
use std::fmt;

use validator::Validate;

use crate::error::BalanceError;
use crate::models::{PlayerCard, ATTRIBUTE_MAX, ATTRIBUTE_MIN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identifier missing or blank
    MissingId { position: usize },

    /// Attribute outside 1..=99
    InvalidAttribute { player_id: String, attribute: String, value: u8 },

    /// Same id used twice in one roster
    DuplicateId(String),

    /// Anything else reported by the field validators
    ValidationFailed(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId { position } => {
                write!(f, "Player at position {} has no id", position)
            }
            ValidationError::InvalidAttribute { player_id, attribute, value } => write!(
                f,
                "Invalid attribute {} for player {}: {}. Must be between {} and {}",
                attribute, player_id, value, ATTRIBUTE_MIN, ATTRIBUTE_MAX
            ),
            ValidationError::DuplicateId(id) => write!(f, "Duplicate player id: {}", id),
            ValidationError::ValidationFailed(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for BalanceError {
    fn from(err: ValidationError) -> Self {
        BalanceError::InvalidPlayer(err.to_string())
    }
}

/// Player validation utility
pub struct PlayerValidator;

impl PlayerValidator {
    /// Check one card: non-blank id, every attribute in 1..=99.
    ///
    /// `position` is only used to name the card in error messages.
    pub fn validate_card(card: &PlayerCard, position: usize) -> Result<(), ValidationError> {
        if card.id.trim().is_empty() {
            return Err(ValidationError::MissingId { position });
        }

        // Report the first offending attribute by name rather than the
        // aggregated validator output.
        let attrs = &card.attributes;
        let fields = attrs
            .skills()
            .into_iter()
            .chain(std::iter::once(("overall", attrs.overall)));
        for (attribute, value) in fields {
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
                return Err(ValidationError::InvalidAttribute {
                    player_id: card.id.clone(),
                    attribute: attribute.to_string(),
                    value,
                });
            }
        }

        card.validate().map_err(|e| ValidationError::ValidationFailed(e.to_string()))
    }

    /// Check every card and reject duplicate ids.
    pub fn validate_roster(players: &[PlayerCard]) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(players.len());
        for (position, card) in players.iter().enumerate() {
            Self::validate_card(card, position)?;
            if !seen.insert(card.id.as_str()) {
                return Err(ValidationError::DuplicateId(card.id.clone()));
            }
        }
        Ok(())
    }

    /// Whether `overall` matches the rounded mean of the six skills.
    pub fn overall_is_consistent(card: &PlayerCard) -> bool {
        let a = &card.attributes;
        let expected = crate::models::PlayerAttributes::compute_overall(
            a.pace,
            a.shooting,
            a.passing,
            a.dribbling,
            a.defense,
            a.physical,
        );
        expected == a.overall
    }
}
