//! Property tests over generated rosters.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use squad_core::balance::{draft_teams, randomized_search, split_two_teams, team_stats};
use squad_core::{BalanceConfig, DraftOrder, PlayerAttributes, PlayerCard};

fn arb_attributes() -> impl Strategy<Value = PlayerAttributes> {
    (1u8..=99, 1u8..=99, 1u8..=99, 1u8..=99, 1u8..=99, 1u8..=99)
        .prop_map(|(pa, sh, ps, dr, de, ph)| PlayerAttributes::new(pa, sh, ps, dr, de, ph))
}

fn arb_roster(max: usize) -> impl Strategy<Value = Vec<PlayerCard>> {
    prop::collection::vec(arb_attributes(), 0..=max).prop_map(|attrs| {
        attrs
            .into_iter()
            .enumerate()
            .map(|(i, a)| PlayerCard::new(format!("id-{}", i), "", a))
            .collect()
    })
}

fn arb_order() -> impl Strategy<Value = DraftOrder> {
    prop_oneof![Just(DraftOrder::RoundRobin), Just(DraftOrder::Snake)]
}

fn sorted_ids<'a>(teams: impl IntoIterator<Item = &'a PlayerCard>) -> Vec<String> {
    let mut ids: Vec<String> = teams.into_iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids
}

fn rounded_one_decimal(players: &[PlayerCard]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let total: f64 = players.iter().map(|p| p.overall() as f64).sum();
    (total / players.len() as f64 * 10.0).round() / 10.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every player lands on exactly one of the two teams
    #[test]
    fn prop_two_teams_complete_and_sized(players in arb_roster(16), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = split_two_teams(&players, &BalanceConfig::default(), &mut rng);

        if players.len() < 2 {
            prop_assert!(result.team_a.players.is_empty());
            prop_assert!(result.team_b.players.is_empty());
        } else {
            let all = result.team_a.players.iter().chain(result.team_b.players.iter());
            prop_assert_eq!(sorted_ids(all), sorted_ids(&players));
            prop_assert!(result.team_a.len().abs_diff(result.team_b.len()) <= 1);
        }
    }

    /// Average rating is the one-decimal rounded mean overall
    #[test]
    fn prop_average_rating(players in arb_roster(14), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = split_two_teams(&players, &BalanceConfig::fast(), &mut rng);
        prop_assert_eq!(result.team_a.average_rating, rounded_one_decimal(&result.team_a.players));
        prop_assert_eq!(result.team_b.average_rating, rounded_one_decimal(&result.team_b.players));
        prop_assert_eq!(result.team_a.stats, team_stats(&result.team_a.players));
    }

    /// The kept split is never worse than the first attempt
    #[test]
    fn prop_search_never_regresses(players in arb_roster(14), seed in any::<u64>()) {
        prop_assume!(players.len() >= 5);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let report = randomized_search(&players, &BalanceConfig::default(), &mut rng);
        prop_assert!(report.best_score <= report.first_score);
        prop_assert_eq!(report.attempts, BalanceConfig::default().attempt_cap(players.len()));
    }

    /// Rosters of up to four ignore the random source entirely
    #[test]
    fn prop_small_rosters_deterministic(players in arb_roster(4), s1 in any::<u64>(), s2 in any::<u64>()) {
        let cfg = BalanceConfig::default();
        let first = split_two_teams(&players, &cfg, &mut ChaCha8Rng::seed_from_u64(s1));
        let second = split_two_teams(&players, &cfg, &mut ChaCha8Rng::seed_from_u64(s2));
        prop_assert_eq!(first, second);
    }

    /// Draft covers everyone, keeps sizes within one, and repeats exactly
    #[test]
    fn prop_draft_complete_sized_deterministic(
        players in arb_roster(30),
        teams in 1usize..=6,
        order in arb_order(),
    ) {
        let drafted = draft_teams(&players, teams, order).unwrap();
        prop_assert_eq!(drafted.len(), teams);

        let all = drafted.iter().flat_map(|t| t.players.iter());
        prop_assert_eq!(sorted_ids(all), sorted_ids(&players));

        let sizes: Vec<usize> = drafted.iter().map(|t| t.players.len()).collect();
        let max = sizes.iter().copied().max().unwrap_or(0);
        let min = sizes.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);

        prop_assert_eq!(&drafted, &draft_teams(&players, teams, order).unwrap());
    }

    /// Every fused skill sits between the weakest and strongest source
    #[test]
    fn prop_fusion_within_source_range(players in arb_roster(5)) {
        prop_assume!(players.len() >= 2);
        let fused = PlayerCard::fuse(&players).unwrap();

        for (i, (name, value)) in fused.attributes.skills().iter().enumerate() {
            let source: Vec<u8> = players.iter().map(|p| p.attributes.skills()[i].1).collect();
            let lo = source.iter().copied().min().unwrap();
            let hi = source.iter().copied().max().unwrap();
            prop_assert!(lo <= *value && *value <= hi, "{} = {} outside {}..={}", name, value, lo, hi);
        }
    }
}
