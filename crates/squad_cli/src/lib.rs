//! Roster loading and report formatting for the `squad` CLI.
//!
//! JSON 또는 CSV 로스터 → PlayerCard 목록

pub mod roster;

pub use roster::{inconsistent_overalls, load_roster, parse_csv_roster, ParseStats, RosterFile};

use anyhow::{Context, Result};
use squad_core::balance::StatsDiff;
use squad_core::{BalanceConfig, BalanceResult, PlayerCard, PlayerRole, TeamAssignment};
use std::fmt::Write as _;
use std::path::Path;
use std::{env, fs};

/// Env var naming a config file when `--config` is not given.
pub const CONFIG_PATH_ENV: &str = "SQUAD_BALANCE_CONFIG";

/// Config from `--config`, else from `$SQUAD_BALANCE_CONFIG`, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<BalanceConfig> {
    if let Some(path) = path {
        return read_config(path);
    }

    let Ok(env_path) = env::var(CONFIG_PATH_ENV) else {
        return Ok(BalanceConfig::default());
    };
    let env_path = env_path.trim();
    if env_path.is_empty() {
        return Ok(BalanceConfig::default());
    }

    read_config(Path::new(env_path))
        .with_context(|| format!("Failed to load config from {}='{}'", CONFIG_PATH_ENV, env_path))
}

fn read_config(path: &Path) -> Result<BalanceConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = BalanceConfig::from_json(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Plain-text report of a two-team split.
pub fn format_split(result: &BalanceResult) -> String {
    let mut out = String::new();
    for (label, team) in [("Team A", &result.team_a), ("Team B", &result.team_b)] {
        let _ = writeln!(out, "{}  (AVG {:.1}, {} players)", label, team.average_rating, team.len());
        write_players(&mut out, &team.players);
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "Imbalance score: {}", result.imbalance_score);
    if let Some((skill, gap)) = StatsDiff::between(&result.team_a.stats, &result.team_b.stats).biggest_edge() {
        let ahead = if gap > 0 { "Team A" } else { "Team B" };
        let _ = writeln!(out, "Biggest gap: {} ({} +{})", skill, ahead, gap.unsigned_abs());
    }
    out
}

/// Plain-text view of a single card with its skills.
pub fn format_card(card: &PlayerCard) -> String {
    let a = &card.attributes;
    let mut out = String::new();
    let _ = writeln!(out, "{}  [{}]  OVR {}", card.display_name(), card.id, a.overall);
    let _ = writeln!(
        out,
        "  PAC {}  SHO {}  PAS {}  DRI {}  DEF {}  PHY {}",
        a.pace, a.shooting, a.passing, a.dribbling, a.defense, a.physical
    );
    out
}

/// Plain-text report of an N-team draft.
pub fn format_teams(teams: &[TeamAssignment]) -> String {
    let mut out = String::new();
    for team in teams {
        let s = &team.total_stats;
        let _ = writeln!(out, "{}  (OVR {}, {} players)", team.name, s.overall, team.players.len());
        let _ = writeln!(
            out,
            "  PAC {}  SHO {}  PAS {}  DRI {}  DEF {}  PHY {}",
            s.pace, s.shooting, s.passing, s.dribbling, s.defense, s.physical
        );
        write_players(&mut out, &team.players);
        let _ = writeln!(out);
    }
    out
}

/// One line per player with their card role.
pub fn format_roles(players: &[PlayerCard]) -> String {
    let mut out = String::new();
    for p in players {
        let role = PlayerRole::classify(&p.attributes);
        let _ = writeln!(out, "{:>3}  {:<20} {} {}", p.overall(), p.display_name(), role.icon, role.title);
    }
    out
}

fn write_players(out: &mut String, players: &[PlayerCard]) {
    for p in players {
        let _ = writeln!(out, "  {:>3}  {}", p.overall(), p.display_name());
    }
}
