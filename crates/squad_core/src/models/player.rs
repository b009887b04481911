use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const ATTRIBUTE_MIN: u8 = 1;
pub const ATTRIBUTE_MAX: u8 = 99;

/// Six base skills plus the overall rating shown on a player card.
///
/// # Contract
/// - Every field is expected in `1..=99`. The balancer does not check or
///   clamp this; use [`crate::player::PlayerValidator`] at the input boundary.
/// - `overall` is supplied by the caller (normally the rounded mean of the
///   six skills, see [`PlayerAttributes::compute_overall`]) and is never
///   recomputed by the balancer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Validate,
)]
pub struct PlayerAttributes {
    #[validate(range(min = 1, max = 99))]
    pub pace: u8,
    #[validate(range(min = 1, max = 99))]
    pub shooting: u8,
    #[validate(range(min = 1, max = 99))]
    pub passing: u8,
    #[validate(range(min = 1, max = 99))]
    pub dribbling: u8,
    #[validate(range(min = 1, max = 99))]
    pub defense: u8,
    #[validate(range(min = 1, max = 99))]
    pub physical: u8,
    #[validate(range(min = 1, max = 99))]
    pub overall: u8,
}

impl PlayerAttributes {
    /// Build a record whose overall is derived from the six skills.
    pub fn new(pace: u8, shooting: u8, passing: u8, dribbling: u8, defense: u8, physical: u8) -> Self {
        let overall = Self::compute_overall(pace, shooting, passing, dribbling, defense, physical);
        Self { pace, shooting, passing, dribbling, defense, physical, overall }
    }

    /// Every skill and the overall set to the same rating.
    pub fn uniform(rating: u8) -> Self {
        Self {
            pace: rating,
            shooting: rating,
            passing: rating,
            dribbling: rating,
            defense: rating,
            physical: rating,
            overall: rating,
        }
    }

    /// Rounded mean of the six skills, halves rounding up.
    pub fn compute_overall(
        pace: u8,
        shooting: u8,
        passing: u8,
        dribbling: u8,
        defense: u8,
        physical: u8,
    ) -> u8 {
        let sum = pace as u32
            + shooting as u32
            + passing as u32
            + dribbling as u32
            + defense as u32
            + physical as u32;
        ((sum + 3) / 6) as u8
    }

    /// The six base skills in display order (overall excluded).
    pub fn skills(&self) -> [(&'static str, u8); 6] {
        [
            ("pace", self.pace),
            ("shooting", self.shooting),
            ("passing", self.passing),
            ("dribbling", self.dribbling),
            ("defense", self.defense),
            ("physical", self.physical),
        ]
    }

    pub fn best_skill(&self) -> u8 {
        self.skills().iter().map(|(_, v)| *v).max().unwrap_or(0)
    }

    pub fn worst_skill(&self) -> u8 {
        self.skills().iter().map(|(_, v)| *v).min().unwrap_or(0)
    }
}

/// A player as handed to the balancer.
///
/// `id` is opaque: it is echoed back in team output and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct PlayerCard {
    #[validate(length(min = 1))]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    #[validate]
    pub attributes: PlayerAttributes,
}

impl PlayerCard {
    pub fn new(id: impl Into<String>, name: impl Into<String>, attributes: PlayerAttributes) -> Self {
        Self { id: id.into(), name: name.into(), attributes }
    }

    #[inline]
    pub fn overall(&self) -> u8 {
        self.attributes.overall
    }

    /// Label for tables and logs: the name when present, otherwise the id.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
