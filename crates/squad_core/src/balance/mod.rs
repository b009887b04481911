//! Team balancing
//!
//! Two interchangeable ways to split a roster:
//! - [`two_team`]: randomized restart search, two teams, best balance
//! - [`n_team`]: deterministic draft by rating, any number of teams
//!
//! Both only read the input cards and return fresh output; nothing is kept
//! between calls, so a [`TeamBalancer`] can be shared across threads.

pub mod config;
pub mod n_team;
pub mod stats;
pub mod two_team;

pub use config::{BalanceConfig, DraftOrder, Strategy};
pub use n_team::{
    check_team_count, draft_slot, draft_teams, generate_n_teams, team_label, MAX_TEAMS,
};
pub use stats::{average_rating, imbalance_score, team_stats, StatsDiff};
pub use two_team::{
    alternating_split, generate_balanced_teams, randomized_search, split_two_teams, SearchReport,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{BalanceError, Result};
use crate::models::{BalanceResult, PlayerCard, TeamAssignment};

/// Config-carrying front door to both variants.
#[derive(Debug, Clone, Default)]
pub struct TeamBalancer {
    config: BalanceConfig,
}

impl TeamBalancer {
    pub fn new(config: BalanceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Random source for one call: seeded from `config.seed` when set.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    pub fn two_teams<R: Rng + ?Sized>(&self, players: &[PlayerCard], rng: &mut R) -> BalanceResult {
        split_two_teams(players, &self.config, rng)
    }

    pub fn n_teams(&self, players: &[PlayerCard], number_of_teams: usize) -> Result<Vec<TeamAssignment>> {
        draft_teams(players, number_of_teams, self.config.draft_order)
    }

    /// Split into `number_of_teams` teams using the configured strategy.
    pub fn balance<R: Rng + ?Sized>(
        &self,
        players: &[PlayerCard],
        number_of_teams: usize,
        rng: &mut R,
    ) -> Result<Vec<TeamAssignment>> {
        check_team_count(number_of_teams)?;

        let randomized = match self.config.strategy {
            Strategy::Auto => number_of_teams == 2,
            Strategy::Greedy => false,
            Strategy::Randomized if number_of_teams == 2 => true,
            Strategy::Randomized => {
                return Err(BalanceError::StrategyUnsupported {
                    strategy: self.config.strategy.to_string(),
                    teams: number_of_teams,
                });
            }
        };
        debug!(roster = players.len(), teams = number_of_teams, randomized, "balancing");

        if randomized {
            Ok(into_assignments(self.two_teams(players, rng)))
        } else {
            self.n_teams(players, number_of_teams)
        }
    }

    /// [`TeamBalancer::balance`] with a random source from [`TeamBalancer::rng`].
    pub fn balance_seeded(&self, players: &[PlayerCard], number_of_teams: usize) -> Result<Vec<TeamAssignment>> {
        let mut rng = self.rng();
        self.balance(players, number_of_teams, &mut rng)
    }
}

/// Two-team result as "Team A" / "Team B" assignments with rounded means.
pub fn into_assignments(result: BalanceResult) -> Vec<TeamAssignment> {
    [result.team_a, result.team_b]
        .into_iter()
        .enumerate()
        .map(|(index, team)| TeamAssignment {
            index,
            name: team_label(index),
            total_stats: team.stats.rounded_mean(team.players.len()),
            players: team.players,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerAttributes;

    fn roster(overalls: &[u8]) -> Vec<PlayerCard> {
        overalls
            .iter()
            .enumerate()
            .map(|(i, &o)| PlayerCard::new(format!("p{}", i), "", PlayerAttributes::uniform(o)))
            .collect()
    }

    #[test]
    fn test_new_validates_config() {
        let bad = BalanceConfig { max_attempts: 0, ..Default::default() };
        assert!(TeamBalancer::new(bad).is_err());
        assert!(TeamBalancer::new(BalanceConfig::default()).is_ok());
    }

    #[test]
    fn test_auto_uses_search_for_two_teams() {
        let balancer = TeamBalancer::new(BalanceConfig::default().with_seed(3)).unwrap();
        let players = roster(&[90, 80, 70, 60, 50, 40]);
        let teams = balancer.balance_seeded(&players, 2).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "Team A");

        let direct = balancer.two_teams(&players, &mut balancer.rng());
        assert_eq!(teams, into_assignments(direct));
    }

    #[test]
    fn test_auto_uses_draft_for_three_teams() {
        let balancer = TeamBalancer::default();
        let players = roster(&[90, 80, 70, 60, 50, 40]);
        let teams = balancer.balance_seeded(&players, 3).unwrap();
        assert_eq!(teams, generate_n_teams(&players, 3).unwrap());
    }

    #[test]
    fn test_greedy_strategy_for_two_teams() {
        let cfg = BalanceConfig { strategy: Strategy::Greedy, ..Default::default() };
        let balancer = TeamBalancer::new(cfg).unwrap();
        let players = roster(&[90, 80, 70, 60, 50, 40]);
        let teams = balancer.balance_seeded(&players, 2).unwrap();
        assert_eq!(teams[0].total_stats.overall, 70);
        assert_eq!(teams[1].total_stats.overall, 60);
    }

    #[test]
    fn test_randomized_strategy_rejects_three_teams() {
        let cfg = BalanceConfig { strategy: Strategy::Randomized, ..Default::default() };
        let balancer = TeamBalancer::new(cfg).unwrap();
        let err = balancer.balance_seeded(&roster(&[90, 80, 70]), 3).unwrap_err();
        assert!(matches!(err, BalanceError::StrategyUnsupported { teams: 3, .. }));
    }

    #[test]
    fn test_zero_teams_rejected_for_every_strategy() {
        for strategy in [Strategy::Auto, Strategy::Greedy, Strategy::Randomized] {
            let cfg = BalanceConfig { strategy, ..Default::default() };
            let balancer = TeamBalancer::new(cfg).unwrap();
            let err = balancer.balance_seeded(&roster(&[90]), 0).unwrap_err();
            assert_eq!(err, BalanceError::InvalidTeamCount { requested: 0 });

            let err = balancer.balance_seeded(&roster(&[90]), usize::MAX).unwrap_err();
            assert_eq!(err, BalanceError::InvalidTeamCount { requested: usize::MAX });
        }
    }

    #[test]
    fn test_snake_order_from_config() {
        let cfg = BalanceConfig { draft_order: DraftOrder::Snake, ..Default::default() };
        let balancer = TeamBalancer::new(cfg).unwrap();
        let teams = balancer.n_teams(&roster(&[90, 85, 80, 75, 70, 65]), 3).unwrap();
        let ids: Vec<&str> = teams[0].player_ids().collect();
        assert_eq!(ids, vec!["p0", "p5"]);
    }
}
