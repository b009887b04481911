//! Team aggregation and imbalance scoring shared by both variants.
//!
//! Scoring always works on exact integer sums; rounding happens only when
//! a result is prepared for output.

use crate::models::{PlayerCard, TeamStats};

/// Element-wise sum of the six skills and overall. No rounding.
pub fn team_stats<'a, I>(players: I) -> TeamStats
where
    I: IntoIterator<Item = &'a PlayerCard>,
{
    players.into_iter().fold(TeamStats::default(), |stats, p| stats.with(&p.attributes))
}

/// Sum of absolute skill differences plus `overall_weight` × the overall
/// difference. Lower is more balanced.
pub fn imbalance_score(a: &TeamStats, b: &TeamStats, overall_weight: u32) -> u32 {
    StatsDiff::between(a, b).weighted_total(overall_weight)
}

/// Mean overall rounded to one decimal place, 0 for an empty team.
pub fn average_rating(players: &[PlayerCard]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let total: u32 = players.iter().map(|p| p.overall() as u32).sum();
    let mean = total as f64 / players.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Signed per-field difference between two teams (a - b).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsDiff {
    pub pace: i64,
    pub shooting: i64,
    pub passing: i64,
    pub dribbling: i64,
    pub defense: i64,
    pub physical: i64,
    pub overall: i64,
}

impl StatsDiff {
    pub fn between(a: &TeamStats, b: &TeamStats) -> Self {
        let d = |x: u32, y: u32| x as i64 - y as i64;
        Self {
            pace: d(a.pace, b.pace),
            shooting: d(a.shooting, b.shooting),
            passing: d(a.passing, b.passing),
            dribbling: d(a.dribbling, b.dribbling),
            defense: d(a.defense, b.defense),
            physical: d(a.physical, b.physical),
            overall: d(a.overall, b.overall),
        }
    }

    /// Absolute skill differences, overall excluded.
    pub fn skill_total(&self) -> u64 {
        self.pace.unsigned_abs()
            + self.shooting.unsigned_abs()
            + self.passing.unsigned_abs()
            + self.dribbling.unsigned_abs()
            + self.defense.unsigned_abs()
            + self.physical.unsigned_abs()
    }

    pub fn weighted_total(&self, overall_weight: u32) -> u32 {
        let total = self.skill_total() + self.overall.unsigned_abs() * overall_weight as u64;
        total.min(u32::MAX as u64) as u32
    }

    /// Skill with the largest absolute gap, if any.
    pub fn biggest_edge(&self) -> Option<(&'static str, i64)> {
        self.skill_fields()
            .into_iter()
            .filter(|(_, diff)| *diff != 0)
            .max_by_key(|(_, diff)| diff.unsigned_abs())
    }

    fn skill_fields(&self) -> [(&'static str, i64); 6] {
        [
            ("pace", self.pace),
            ("shooting", self.shooting),
            ("passing", self.passing),
            ("dribbling", self.dribbling),
            ("defense", self.defense),
            ("physical", self.physical),
        ]
    }
}
