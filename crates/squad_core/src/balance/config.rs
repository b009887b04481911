//! Balancer tuning knobs.
//!
//! 모든 파라미터는 호출마다 명시적으로 전달된다 (전역 상태 없음).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};

/// Largest accepted `exponent_cap`; keeps `2^exponent` inside `u32`.
pub const MAX_EXPONENT_CAP: u32 = 30;

/// How the N-team draft walks the rating-sorted roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DraftOrder {
    /// Rank `i` goes to team `i % n`.
    #[default]
    RoundRobin,
    /// Direction reverses every round: A,B,C,C,B,A,A,B,C,...
    Snake,
}

/// Which variant [`crate::balance::TeamBalancer::balance`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Randomized search for two teams, greedy draft otherwise.
    #[default]
    Auto,
    /// Always the deterministic draft.
    Greedy,
    /// Always the randomized two-team search (two teams only).
    Randomized,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Auto => "auto",
            Strategy::Greedy => "greedy",
            Strategy::Randomized => "randomized",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Strategy::Auto),
            "greedy" => Ok(Strategy::Greedy),
            "randomized" => Ok(Strategy::Randomized),
            other => Err(format!("unknown strategy '{}' (auto, greedy, randomized)", other)),
        }
    }
}

/// Balancer parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BalanceConfig {
    /// Flat ceiling on randomized attempts (기본: 1000)
    pub max_attempts: u32,
    /// Exponent cap of the `2^min(n, cap)` term (기본: 10)
    pub exponent_cap: u32,
    /// Rosters of 2..=this size are split by alternating draft (기본: 4)
    pub small_roster_max: usize,
    /// Multiplier on the overall difference in the imbalance score (기본: 2)
    pub overall_weight: u32,
    pub draft_order: DraftOrder,
    pub strategy: Strategy,
    /// Seed for the randomized search; entropy when absent
    pub seed: Option<u64>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            exponent_cap: 10,
            small_roster_max: 4,
            overall_weight: 2,
            draft_order: DraftOrder::RoundRobin,
            strategy: Strategy::Auto,
            seed: None,
        }
    }
}

impl BalanceConfig {
    /// More restarts for large groups where latency matters less.
    pub fn thorough() -> Self {
        Self { max_attempts: 10_000, exponent_cap: 14, ..Self::default() }
    }

    /// Few restarts, for previews that re-run on every roster change.
    pub fn fast() -> Self {
        Self { max_attempts: 100, exponent_cap: 7, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Randomized restarts for a roster of `roster_size` players:
    /// `min(max_attempts, 2^min(n, exponent_cap))`.
    pub fn attempt_cap(&self, roster_size: usize) -> u32 {
        let exponent = (roster_size.min(u32::MAX as usize) as u32)
            .min(self.exponent_cap)
            .min(MAX_EXPONENT_CAP);
        self.max_attempts.min(1u32 << exponent)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(BalanceError::InvalidConfig("max_attempts must be at least 1".into()));
        }
        if self.exponent_cap > MAX_EXPONENT_CAP {
            return Err(BalanceError::InvalidConfig(format!(
                "exponent_cap must be <= {}, got {}",
                MAX_EXPONENT_CAP, self.exponent_cap
            )));
        }
        if self.overall_weight == 0 {
            return Err(BalanceError::InvalidConfig("overall_weight must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = BalanceConfig::default();
        assert_eq!(cfg.max_attempts, 1000);
        assert_eq!(cfg.exponent_cap, 10);
        assert_eq!(cfg.small_roster_max, 4);
        assert_eq!(cfg.overall_weight, 2);
        assert_eq!(cfg.draft_order, DraftOrder::RoundRobin);
        assert!(cfg.seed.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_attempt_cap_formula() {
        let cfg = BalanceConfig::default();
        assert_eq!(cfg.attempt_cap(5), 32);
        assert_eq!(cfg.attempt_cap(9), 512);
        // 2^10 = 1024 is above the flat ceiling
        assert_eq!(cfg.attempt_cap(10), 1000);
        assert_eq!(cfg.attempt_cap(40), 1000);
        assert_eq!(cfg.attempt_cap(0), 1);
    }

    #[test]
    fn test_presets_order() {
        let n = 20;
        assert!(BalanceConfig::fast().attempt_cap(n) < BalanceConfig::default().attempt_cap(n));
        assert!(BalanceConfig::thorough().attempt_cap(n) > BalanceConfig::default().attempt_cap(n));
        assert!(BalanceConfig::thorough().validate().is_ok());
        assert!(BalanceConfig::fast().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_attempts = BalanceConfig { max_attempts: 0, ..Default::default() };
        assert!(matches!(zero_attempts.validate(), Err(BalanceError::InvalidConfig(_))));

        let huge_exponent = BalanceConfig { exponent_cap: 31, ..Default::default() };
        assert!(huge_exponent.validate().is_err());

        let no_weight = BalanceConfig { overall_weight: 0, ..Default::default() };
        assert!(no_weight.validate().is_err());
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("Greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!(" randomized ".parse::<Strategy>(), Ok(Strategy::Randomized));
        assert_eq!(Strategy::Auto.to_string().parse::<Strategy>(), Ok(Strategy::Auto));
        assert!("snake".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = BalanceConfig::from_json(r#"{"max_attempts": 50, "draft_order": "snake", "seed": 7}"#)
            .unwrap();
        assert_eq!(cfg.max_attempts, 50);
        assert_eq!(cfg.exponent_cap, 10);
        assert_eq!(cfg.draft_order, DraftOrder::Snake);
        assert_eq!(cfg.seed, Some(7));

        assert!(BalanceConfig::from_json(r#"{"max_attempts": 0}"#).is_err());
    }
}
