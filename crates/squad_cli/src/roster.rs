//! Roster file parsing
//!
//! - `.json`: array of player cards
//! - `.csv`: header `id,name,pace,shooting,passing,dribbling,defense,physical[,overall]`
//!
//! Rosters are validated before they are handed to the balancer. A CSV row
//! that cannot be read fails the whole load rather than dropping a player.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use squad_core::{PlayerAttributes, PlayerCard, PlayerValidator};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Supported roster formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFile {
    Json,
    Csv,
}

impl RosterFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(RosterFile::Json),
            "csv" => Ok(RosterFile::Csv),
            _ => bail!("Unsupported roster file (expected .json or .csv): {}", path.display()),
        }
    }
}

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    /// Rows whose overall column was empty and got computed
    pub computed_overall: u32,
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    #[serde(default)]
    name: String,
    pace: u8,
    shooting: u8,
    passing: u8,
    dribbling: u8,
    defense: u8,
    physical: u8,
    #[serde(default)]
    overall: Option<u8>,
}

impl RosterRow {
    fn into_card(self, stats: &mut ParseStats) -> PlayerCard {
        let mut attributes = PlayerAttributes::new(
            self.pace,
            self.shooting,
            self.passing,
            self.dribbling,
            self.defense,
            self.physical,
        );
        match self.overall {
            Some(overall) => attributes.overall = overall,
            None => stats.computed_overall += 1,
        }
        PlayerCard::new(self.id, self.name, attributes)
    }
}

/// Parse a CSV roster. Rows that fail to parse are skipped with a warning
/// and counted in [`ParseStats::failed`].
pub fn parse_csv_roster(csv_path: &Path) -> Result<(Vec<PlayerCard>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let mut stats = ParseStats::default();
    let mut players = Vec::new();

    for (row, record) in reader.deserialize::<RosterRow>().enumerate() {
        stats.total_rows += 1;
        match record {
            Ok(parsed) => {
                players.push(parsed.into_card(&mut stats));
                stats.parsed += 1;
            }
            Err(err) => {
                stats.failed += 1;
                // +2: header line and 1-based numbering
                warn!(line = row + 2, error = %err, "skipping unreadable roster row");
            }
        }
    }

    Ok((players, stats))
}

fn parse_json_roster(json_path: &Path) -> Result<Vec<PlayerCard>> {
    let json_str = fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;
    let players: Vec<PlayerCard> =
        serde_json::from_str(&json_str).context("Failed to parse roster JSON")?;
    Ok(players)
}

/// Load and validate a roster from `.json` or `.csv`.
pub fn load_roster(path: &Path) -> Result<Vec<PlayerCard>> {
    let players = match RosterFile::from_path(path)? {
        RosterFile::Json => parse_json_roster(path)?,
        RosterFile::Csv => {
            let (players, stats) = parse_csv_roster(path)?;
            info!(
                rows = stats.total_rows,
                parsed = stats.parsed,
                failed = stats.failed,
                computed_overall = stats.computed_overall,
                "csv roster parsed"
            );
            if stats.failed > 0 {
                bail!(
                    "{} of {} roster row(s) could not be parsed: {}",
                    stats.failed,
                    stats.total_rows,
                    path.display()
                );
            }
            players
        }
    };

    PlayerValidator::validate_roster(&players)
        .with_context(|| format!("Invalid roster: {}", path.display()))?;

    let mismatched = inconsistent_overalls(&players);
    if !mismatched.is_empty() {
        warn!(count = mismatched.len(), ids = ?mismatched, "overall differs from the skill mean");
    }
    Ok(players)
}

/// Ids of cards whose supplied overall is not the rounded mean of their
/// skills. The balancer uses the supplied value either way.
pub fn inconsistent_overalls(players: &[PlayerCard]) -> Vec<&str> {
    players
        .iter()
        .filter(|p| !PlayerValidator::overall_is_consistent(p))
        .map(|p| p.id.as_str())
        .collect()
}
