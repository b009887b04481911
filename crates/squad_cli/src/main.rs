//! squad CLI
//!
//! 로스터 파일 → 밸런스 팀 구성

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use squad_core::{BalanceRequest, DraftOrder, PlayerCard, Strategy, TeamBalancer};
use squad_cli::{format_card, format_roles, format_split, format_teams, load_config, load_roster};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "squad", version)]
#[command(about = "Balance pickup football teams from a roster file", long_about = None)]
struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split the roster into two balanced teams
    Split {
        /// Roster file (.json or .csv)
        #[arg(long)]
        roster: PathBuf,

        /// Seed for a reproducible split
        #[arg(long)]
        seed: Option<u64>,

        /// Flat ceiling on search attempts
        #[arg(long)]
        attempts: Option<u32>,

        /// Balancer config JSON (falls back to $SQUAD_BALANCE_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Build N teams (draft, or the two-team search when the strategy allows)
    Draft {
        /// Roster file (.json or .csv)
        #[arg(long)]
        roster: PathBuf,

        /// Number of teams
        #[arg(long)]
        teams: usize,

        /// Reverse direction every round
        #[arg(long, default_value = "false")]
        snake: bool,

        /// auto, greedy or randomized (overrides the config file)
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Seed for the randomized search
        #[arg(long)]
        seed: Option<u64>,

        /// Balancer config JSON (falls back to $SQUAD_BALANCE_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Merge 2-5 cards into one fusion card
    Fuse {
        /// Roster file (.json or .csv)
        #[arg(long)]
        roster: PathBuf,

        /// Comma-separated ids of the cards to merge
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Show each player's card role
    Roles {
        /// Roster file (.json or .csv)
        #[arg(long)]
        roster: PathBuf,
    },

    /// Print the JSON schema of a balance request
    Schema,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Split { roster, seed, attempts, config, json } => {
            let mut cfg = load_config(config.as_deref())?;
            if let Some(seed) = seed {
                cfg.seed = Some(seed);
            }
            if let Some(attempts) = attempts {
                cfg.max_attempts = attempts;
            }
            let balancer = TeamBalancer::new(cfg)?;

            let players = load_roster(&roster)?;
            let result = balancer.two_teams(&players, &mut balancer.rng());

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", format_split(&result));
            }
        }

        Commands::Draft { roster, teams, snake, strategy, seed, config, json } => {
            let mut cfg = load_config(config.as_deref())?;
            if snake {
                cfg.draft_order = DraftOrder::Snake;
            }
            if let Some(strategy) = strategy {
                cfg.strategy = strategy;
            }
            if let Some(seed) = seed {
                cfg.seed = Some(seed);
            }
            let balancer = TeamBalancer::new(cfg)?;

            let players = load_roster(&roster)?;
            let drafted = balancer.balance_seeded(&players, teams)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&drafted)?);
            } else {
                print!("{}", format_teams(&drafted));
            }
        }

        Commands::Fuse { roster, ids, json } => {
            let players = load_roster(&roster)?;
            let cards = pick_cards(&players, &ids)?;
            let fused = PlayerCard::fuse(&cards).context("Cannot fuse these cards")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&fused)?);
            } else {
                print!("{}", format_card(&fused));
            }
        }

        Commands::Roles { roster } => {
            let players = load_roster(&roster)?;
            print!("{}", format_roles(&players));
        }

        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&BalanceRequest::json_schema())?);
        }
    }

    Ok(())
}

/// Cards for `ids`, in the order given.
fn pick_cards(players: &[PlayerCard], ids: &[String]) -> Result<Vec<PlayerCard>> {
    ids.iter()
        .map(|id| {
            let id = id.trim();
            players
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("No card with id '{}' in the roster", id))
        })
        .collect()
}
