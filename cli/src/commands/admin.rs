use anyhow::{anyhow, Result};
use std::path::Path;

use mined_api::prelude::*;
use mined_client::{save_engine, EngineHandle};
use mined_client::mined::MiningEngine;

use crate::cli::{Cli, Commands};
use crate::identity::parse_address;
use crate::log;

/// Writes a genesis ledger to `state_path`.
pub fn handle_init(config: TokenomicsConfig, state_path: &Path, force: bool) -> Result<()> {
    if state_path.exists() && !force {
        return Err(anyhow!(
            "Ledger already exists at {} (use --force to overwrite)",
            state_path.display()
        ));
    }

    let engine = MiningEngine::new(config)?;
    save_engine(&engine, state_path)?;

    log::print_section_header("Genesis");
    log::print_message(&format!("Ledger: {}", state_path.display()));
    log::print_message(&format!("Admin: {}", engine.admin()));
    log::print_amount("Total Supply", engine.total_supply());
    log::print_count(&format!("Validators: {}", engine.state().total_validators));
    Ok(())
}

pub async fn handle_admin_commands(cli: Cli, handle: &EngineHandle, signer: Address) -> Result<()> {
    match cli.command {
        Commands::Pause {} => {
            handle.execute(signer, Instruction::Pause).await?;
            log::print_message("Engine paused");
        }
        Commands::Unpause {} => {
            handle.execute(signer, Instruction::Unpause).await?;
            log::print_message("Engine unpaused");
        }
        Commands::SetValidator { validator, active } => {
            let validator = parse_address(&validator)?;
            handle
                .execute(signer, Instruction::SetValidatorActive { validator, active })
                .await?;
            log::print_message(&format!("Validator {} active: {}", validator, active));
        }
        Commands::Advance { blocks } => {
            let now = handle.clock().await;
            handle
                .advance_clock(Clock::new(now.height.saturating_add(blocks), now.unix_timestamp))
                .await?;
            log::print_count(&format!("Height: {}", handle.clock().await.height));
        }
        _ => {}
    }
    Ok(())
}
