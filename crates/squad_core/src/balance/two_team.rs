//! Two-team split: alternating draft for tiny rosters, randomized
//! restart search with greedy placement for everything else.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use super::config::BalanceConfig;
use super::stats::{average_rating, imbalance_score, team_stats};
use crate::models::{BalanceResult, PlayerCard, TeamResult, TeamStats};

/// Split `players` into two teams with the default config and a
/// thread-local random source.
pub fn generate_balanced_teams(players: &[PlayerCard]) -> BalanceResult {
    split_two_teams(players, &BalanceConfig::default(), &mut rand::thread_rng())
}

/// Split `players` into two teams whose sizes differ by at most one.
///
/// - fewer than 2 players: two empty teams, rating 0
/// - up to `config.small_roster_max`: sort by overall, alternate A/B
/// - otherwise: [`randomized_search`]
///
/// Attribute ranges are an unchecked precondition.
pub fn split_two_teams<R: Rng + ?Sized>(
    players: &[PlayerCard],
    config: &BalanceConfig,
    rng: &mut R,
) -> BalanceResult {
    if players.len() < 2 {
        debug!(roster = players.len(), "roster too small to split, returning empty teams");
        return BalanceResult::empty();
    }

    if players.len() <= config.small_roster_max {
        return alternating_split(players, config.overall_weight);
    }

    randomized_search(players, config, rng).into_result(players)
}

/// Sort by overall (stable, descending) and deal A, B, A, B, ...
pub fn alternating_split(players: &[PlayerCard], overall_weight: u32) -> BalanceResult {
    let mut ranked: Vec<&PlayerCard> = players.iter().collect();
    ranked.sort_by(|a, b| b.overall().cmp(&a.overall()));

    let mut team_a = Vec::with_capacity(ranked.len() / 2 + 1);
    let mut team_b = Vec::with_capacity(ranked.len() / 2);
    for (rank, player) in ranked.into_iter().enumerate() {
        if rank % 2 == 0 {
            team_a.push(player.clone());
        } else {
            team_b.push(player.clone());
        }
    }

    let stats_a = team_stats(&team_a);
    let stats_b = team_stats(&team_b);
    let score = imbalance_score(&stats_a, &stats_b, overall_weight);
    debug!(roster = players.len(), score, "alternating split");

    BalanceResult {
        team_a: team_result(team_a, stats_a),
        team_b: team_result(team_b, stats_b),
        imbalance_score: score,
    }
}

/// Outcome of the restart search, as indices into the input roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub team_a: Vec<usize>,
    pub team_b: Vec<usize>,
    pub best_score: u32,
    /// Score of the very first attempt; `best_score` never exceeds it.
    pub first_score: u32,
    pub attempts: u32,
    /// Zero-based attempt that produced the kept split.
    pub best_attempt: u32,
}

impl SearchReport {
    pub fn into_result(self, players: &[PlayerCard]) -> BalanceResult {
        let pick = |indices: &[usize]| -> Vec<PlayerCard> {
            indices.iter().map(|&i| players[i].clone()).collect()
        };
        let team_a = pick(&self.team_a);
        let team_b = pick(&self.team_b);
        let stats_a = team_stats(&team_a);
        let stats_b = team_stats(&team_b);

        BalanceResult {
            team_a: team_result(team_a, stats_a),
            team_b: team_result(team_b, stats_b),
            imbalance_score: self.best_score,
        }
    }
}

/// Random-restart greedy search.
///
/// Each of `config.attempt_cap(n)` attempts shuffles the roster, then walks
/// it placing every player:
/// 1. on the other team if one team already holds `ceil(n / 2)` players
/// 2. on the smaller team if the size gap exceeds one
/// 3. otherwise on whichever team gives the lower imbalance score against
///    the current partial teams, ties going to team A
///
/// The attempt with the lowest final score wins; earlier attempts win ties.
pub fn randomized_search<R: Rng + ?Sized>(
    players: &[PlayerCard],
    config: &BalanceConfig,
    rng: &mut R,
) -> SearchReport {
    let n = players.len();
    let attempts = config.attempt_cap(n).max(1);
    let capacity = (n + 1) / 2;
    let weight = config.overall_weight;

    let mut order: Vec<usize> = (0..n).collect();
    let mut team_a: Vec<usize> = Vec::with_capacity(capacity);
    let mut team_b: Vec<usize> = Vec::with_capacity(capacity);

    let mut best: Option<(u32, u32, Vec<usize>, Vec<usize>)> = None;
    let mut first_score = 0;

    for attempt in 0..attempts {
        order.shuffle(rng);
        team_a.clear();
        team_b.clear();
        let mut stats_a = TeamStats::default();
        let mut stats_b = TeamStats::default();

        for &idx in &order {
            let attrs = &players[idx].attributes;
            let to_a = if team_a.len() >= capacity {
                false
            } else if team_b.len() >= capacity {
                true
            } else if team_a.len().abs_diff(team_b.len()) > 1 {
                team_a.len() < team_b.len()
            } else {
                let score_a = imbalance_score(&stats_a.with(attrs), &stats_b, weight);
                let score_b = imbalance_score(&stats_a, &stats_b.with(attrs), weight);
                score_a <= score_b
            };

            if to_a {
                team_a.push(idx);
                stats_a.add(attrs);
            } else {
                team_b.push(idx);
                stats_b.add(attrs);
            }
        }

        let score = imbalance_score(&stats_a, &stats_b, weight);
        trace!(attempt, score, "attempt finished");

        if attempt == 0 {
            first_score = score;
        }
        let improved = match &best {
            Some((best_score, ..)) => score < *best_score,
            None => true,
        };
        if improved {
            best = Some((score, attempt, team_a.clone(), team_b.clone()));
        }
    }

    // attempts >= 1, so the first iteration always filled `best`
    let (best_score, best_attempt, team_a, team_b) =
        best.unwrap_or_else(|| (0, 0, Vec::new(), Vec::new()));

    debug!(roster = n, attempts, best_score, first_score, best_attempt, "two-team search finished");

    SearchReport { team_a, team_b, best_score, first_score, attempts, best_attempt }
}

fn team_result(players: Vec<PlayerCard>, stats: TeamStats) -> TeamResult {
    let average_rating = average_rating(&players);
    TeamResult { players, average_rating, stats }
}
