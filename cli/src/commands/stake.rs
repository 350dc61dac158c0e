use anyhow::Result;

use mined_api::prelude::*;
use mined_client::EngineHandle;

use crate::cli::{Cli, Commands};
use crate::identity::{parse_address, parse_amount};
use crate::log;

pub async fn handle_stake_commands(cli: Cli, handle: &EngineHandle, signer: Address) -> Result<()> {
    match cli.command {
        Commands::Stake { amount } => {
            let amount = parse_amount(&amount)?;
            handle.execute(signer, Instruction::Stake { amount }).await?;
            print_stake(handle, signer).await;
        }
        Commands::Unstake { amount } => {
            let amount = parse_amount(&amount)?;
            handle.execute(signer, Instruction::Unstake { amount }).await?;
            print_stake(handle, signer).await;
        }
        Commands::Transfer { to, amount } => {
            let to = parse_address(&to)?;
            let amount = parse_amount(&amount)?;
            handle.execute(signer, Instruction::Transfer { to, amount }).await?;
            log::print_message(&format!("Sent {} MINED to {}", amount_to_ui(amount), to));
            log::print_amount("Balance", handle.balance_of(signer).await);
        }
        _ => {}
    }
    Ok(())
}

async fn print_stake(handle: &EngineHandle, signer: Address) {
    if let Some(validator) = handle.validator(signer).await {
        log::print_validator(&validator);
    }
    log::print_amount("Balance", handle.balance_of(signer).await);
}
