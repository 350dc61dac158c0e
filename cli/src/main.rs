mod cli;
mod commands;
mod identity;
mod log;

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Parser;

use mined_api::prelude::*;
use mined_client::{load_config, load_engine, save_engine, EngineHandle, SnapshotError};

use cli::{Cli, Commands};
use commands::{admin, info, mine, research, stake};
use identity::{create_identity, get_identity_path, get_state_path, load_identity, parse_address};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    log::print_title("⛏ MINED");

    let config = load_config(cli.config_path.as_deref())?;
    let state_path = get_state_path(cli.state_path.clone())?;

    if let Commands::Init { force } = cli.command {
        return admin::handle_init(config, &state_path, force);
    }

    let engine = match load_engine(config, &state_path) {
        Ok(engine) => engine,
        Err(SnapshotError::NotFound(path)) => {
            return Err(anyhow!("No ledger at {}. Run `mined init` first.", path));
        }
        Err(e) => return Err(e.into()),
    };

    let signer = match cli.signer.as_deref() {
        Some(text) => parse_address(text)?,
        None => {
            let identity_path = get_identity_path(cli.identity_path.clone())?;
            match load_identity(&identity_path) {
                Ok(address) => address,
                Err(_) => {
                    log::print_message(&format!("Identity not found at {}.", identity_path.display()));
                    log::print_message("Creating a new identity...");
                    create_identity(&identity_path)?
                }
            }
        }
    };

    let mutating = cli.command.is_mutating();
    let handle = EngineHandle::new(engine);

    // Every mutating command lands in its own block.
    if mutating {
        let now = handle.clock().await;
        let next = Clock::new(now.height + 1, Utc::now().timestamp().max(now.unix_timestamp));
        handle.advance_clock(next).await?;
        log::print_message(&format!("Signing as {} at height {}", signer, next.height));
    }

    let result = match cli.command {
        // Mining Commands

        Commands::Mine { .. } |
        Commands::Simulate { .. } => {
            mine::handle_mine_commands(cli, &handle, signer).await
        }

        // Research Commands

        Commands::Discover { .. } |
        Commands::Validate { .. } => {
            research::handle_research_commands(cli, &handle, signer).await
        }

        // Staking Commands

        Commands::Stake { .. } |
        Commands::Unstake { .. } |
        Commands::Transfer { .. } => {
            stake::handle_stake_commands(cli, &handle, signer).await
        }

        // Admin Commands

        Commands::Pause { .. } |
        Commands::Unpause { .. } |
        Commands::SetValidator { .. } |
        Commands::Advance { .. } => {
            admin::handle_admin_commands(cli, &handle, signer).await
        }

        // Miscellaneous Commands

        _ => {
            info::handle_info_commands(cli, &handle, signer).await
        }
    };

    if let Err(e) = &result {
        log::print_error(&e.to_string());
    }

    // Partial progress (e.g. some mined rounds) is kept even if a later step failed.
    if mutating {
        handle.read(|engine| save_engine(engine, &state_path)).await?;
    }

    result
}
