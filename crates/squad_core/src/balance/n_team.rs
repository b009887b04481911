//! N-team draft: one deterministic pass over the rating-sorted roster.

use tracing::{debug, warn};

use super::config::DraftOrder;
use crate::error::{BalanceError, Result};
use crate::models::{PlayerCard, TeamAssignment, TeamStats};

/// Upper bound on requested teams. Counts above the roster size are
/// accepted (extra teams stay empty) up to this limit.
pub const MAX_TEAMS: usize = 1024;

/// Reject a team count outside `1..=MAX_TEAMS` before anything is allocated.
pub fn check_team_count(number_of_teams: usize) -> Result<()> {
    if (1..=MAX_TEAMS).contains(&number_of_teams) {
        Ok(())
    } else {
        Err(BalanceError::InvalidTeamCount { requested: number_of_teams })
    }
}

/// Draft `players` into `number_of_teams` teams in round-robin order.
pub fn generate_n_teams(players: &[PlayerCard], number_of_teams: usize) -> Result<Vec<TeamAssignment>> {
    draft_teams(players, number_of_teams, DraftOrder::RoundRobin)
}

/// Sort by overall (descending, stable) and deal ranks to teams.
///
/// Sizes differ by at most one. Teams left without players (more teams than
/// players) report zeroed stats. A count of zero or above [`MAX_TEAMS`] is
/// rejected before any work is done.
pub fn draft_teams(
    players: &[PlayerCard],
    number_of_teams: usize,
    order: DraftOrder,
) -> Result<Vec<TeamAssignment>> {
    if let Err(err) = check_team_count(number_of_teams) {
        warn!(roster = players.len(), teams = number_of_teams, "rejected draft team count");
        return Err(err);
    }

    let mut ranked: Vec<&PlayerCard> = players.iter().collect();
    ranked.sort_by(|a, b| b.overall().cmp(&a.overall()));

    let mut members: Vec<Vec<PlayerCard>> = vec![Vec::new(); number_of_teams];
    let mut sums = vec![TeamStats::default(); number_of_teams];

    for (rank, player) in ranked.into_iter().enumerate() {
        let team = draft_slot(rank, number_of_teams, order);
        sums[team].add(&player.attributes);
        members[team].push(player.clone());
    }

    if players.len() < number_of_teams {
        debug!(
            roster = players.len(),
            teams = number_of_teams,
            "more teams than players, some teams stay empty"
        );
    }

    let teams: Vec<TeamAssignment> = members
        .into_iter()
        .zip(sums)
        .enumerate()
        .map(|(index, (team_players, sum))| TeamAssignment {
            index,
            name: team_label(index),
            total_stats: sum.rounded_mean(team_players.len()),
            players: team_players,
        })
        .collect();

    debug!(roster = players.len(), teams = number_of_teams, ?order, "draft finished");
    Ok(teams)
}

/// Team that receives the player at sorted position `rank`.
pub fn draft_slot(rank: usize, number_of_teams: usize, order: DraftOrder) -> usize {
    let within_round = rank % number_of_teams;
    match order {
        DraftOrder::RoundRobin => within_round,
        DraftOrder::Snake => {
            if (rank / number_of_teams) % 2 == 0 {
                within_round
            } else {
                number_of_teams - 1 - within_round
            }
        }
    }
}

/// "Team A" .. "Team Z", then "Team AA", "Team AB", ...
pub fn team_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    let suffix: String = letters.into_iter().rev().collect();
    format!("Team {}", suffix)
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

    fn overalls(team: &TeamAssignment) -> Vec<u8> {
        team.players.iter().map(|p| p.overall()).collect()
    }

    #[test]
    fn test_round_robin_two_teams() {
        let teams = generate_n_teams(&roster(&[60, 90, 40, 80, 70, 50]), 2).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "Team A");
        assert_eq!(teams[1].name, "Team B");
        assert_eq!(overalls(&teams[0]), vec![90, 70, 50]);
        assert_eq!(overalls(&teams[1]), vec![80, 60, 40]);
        assert_eq!(teams[0].total_stats.overall, 70);
        assert_eq!(teams[1].total_stats.overall, 60);
        assert_eq!(teams[1].total_stats.pace, 60);
    }

    #[test]
    fn test_uneven_roster() {
        let teams = generate_n_teams(&roster(&[50, 60, 70, 80, 90]), 2).unwrap();
        assert_eq!(overalls(&teams[0]), vec![90, 70, 50]);
        assert_eq!(overalls(&teams[1]), vec![80, 60]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let teams = generate_n_teams(&roster(&[70, 70, 70, 70]), 2).unwrap();
        let ids: Vec<&str> = teams[0].player_ids().collect();
        assert_eq!(ids, vec!["p0", "p2"]);
    }

    #[test]
    fn test_more_teams_than_players() {
        let teams = generate_n_teams(&roster(&[80, 60]), 4).unwrap();
        assert_eq!(teams.len(), 4);
        assert!(teams[2].players.is_empty());
        assert_eq!(teams[3].total_stats, TeamStats::default());
        assert_eq!(teams[3].name, "Team D");
    }

    #[test]
    fn test_zero_teams_rejected() {
        let err = generate_n_teams(&roster(&[80]), 0).unwrap_err();
        assert_eq!(err, BalanceError::InvalidTeamCount { requested: 0 });
    }

    #[test]
    fn test_team_count_limit() {
        let players = roster(&[80, 60]);
        let err = generate_n_teams(&players, usize::MAX).unwrap_err();
        assert_eq!(err, BalanceError::InvalidTeamCount { requested: usize::MAX });
        assert!(generate_n_teams(&players, MAX_TEAMS + 1).is_err());

        let teams = generate_n_teams(&players, MAX_TEAMS).unwrap();
        assert_eq!(teams.len(), MAX_TEAMS);
        assert!(teams[MAX_TEAMS - 1].players.is_empty());
    }

    #[test]
    fn test_single_team_gets_everyone() {
        let teams = generate_n_teams(&roster(&[80, 61, 40]), 1).unwrap();
        assert_eq!(teams[0].players.len(), 3);
        assert_eq!(teams[0].total_stats.overall, 60); // 60.33
    }

    #[test]
    fn test_snake_reverses_each_round() {
        let players = roster(&[90, 85, 80, 75, 70, 65]);
        let teams = draft_teams(&players, 3, DraftOrder::Snake).unwrap();
        assert_eq!(overalls(&teams[0]), vec![90, 65]);
        assert_eq!(overalls(&teams[1]), vec![85, 70]);
        assert_eq!(overalls(&teams[2]), vec![80, 75]);

        let slots: Vec<usize> = (0..7).map(|r| draft_slot(r, 3, DraftOrder::Snake)).collect();
        assert_eq!(slots, vec![0, 1, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn test_team_labels() {
        assert_eq!(team_label(0), "Team A");
        assert_eq!(team_label(25), "Team Z");
        assert_eq!(team_label(26), "Team AA");
        assert_eq!(team_label(27), "Team AB");
    }

    #[test]
    fn test_draft_is_deterministic() {
        let players = roster(&[55, 91, 73, 62, 88, 47, 70]);
        assert_eq!(generate_n_teams(&players, 3).unwrap(), generate_n_teams(&players, 3).unwrap());
    }
}
