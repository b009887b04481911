//! Fusion cards
//!
//! 2~5장의 카드를 합쳐 능력치 평균 카드를 만든다.

use tracing::debug;

use crate::balance::team_stats;
use crate::error::{BalanceError, Result};
use crate::models::{PlayerAttributes, PlayerCard};

pub const FUSION_MIN_CARDS: usize = 2;
pub const FUSION_MAX_CARDS: usize = 5;

impl PlayerCard {
    /// Merge 2..=5 cards into one.
    ///
    /// Each skill is the rounded mean (halves up) of that skill across the
    /// cards, and the overall is recomputed from those skills rather than
    /// averaged from the source overalls. The name is `"Fusion "` followed by
    /// every card's first name joined with `-`; the id joins the source ids.
    pub fn fuse(cards: &[PlayerCard]) -> Result<PlayerCard> {
        let count = cards.len();
        if !(FUSION_MIN_CARDS..=FUSION_MAX_CARDS).contains(&count) {
            return Err(BalanceError::InvalidFusion { count });
        }

        let mean = team_stats(cards).rounded_mean(count);
        // Means of 1..=99 values stay in 1..=99
        let skill = |v: u32| v.min(u8::MAX as u32) as u8;
        let attributes = PlayerAttributes::new(
            skill(mean.pace),
            skill(mean.shooting),
            skill(mean.passing),
            skill(mean.dribbling),
            skill(mean.defense),
            skill(mean.physical),
        );

        let first_names: Vec<&str> = cards
            .iter()
            .map(|c| c.display_name().split_whitespace().next().unwrap_or(c.id.as_str()))
            .collect();
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();

        let fused = PlayerCard::new(
            format!("fusion-{}", ids.join("+")),
            format!("Fusion {}", first_names.join("-")),
            attributes,
        );
        debug!(id = %fused.id, overall = fused.overall(), sources = count, "fused card");
        Ok(fused)
    }
}
