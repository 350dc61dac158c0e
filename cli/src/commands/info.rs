use anyhow::Result;

use mined_api::prelude::*;
use mined_client::{export_json, EngineHandle};

use crate::cli::{Cli, Commands};
use crate::identity::parse_address;
use crate::log;

pub async fn handle_info_commands(cli: Cli, handle: &EngineHandle, signer: Address) -> Result<()> {
    match cli.command {
        Commands::Info {} => {
            let state = handle.state().await;
            let clock = handle.clock().await;
            let paused = handle.read(|e| e.is_paused()).await;

            log::print_section_header("Ledger");
            log::print_message(&format!("Height: {}", clock.height));
            log::print_message(&format!("Paused: {}", paused));
            log::print_amount("Total Supply", state.total_supply);
            log::print_amount("Cumulative Emission", state.cumulative_emission);
            log::print_amount("Cumulative Burn", state.cumulative_burn);
            log::print_amount("Total Staked", state.total_staked);
            log::print_message(&format!("Total Research Value: {}", state.total_research_value));
            log::print_message(&format!("Last Emission Block: {}", state.last_emission_block));
            log::print_count(&format!("Sessions: {}", state.next_session_id - 1));
            log::print_count(&format!("Discoveries: {}", state.next_discovery_id - 1));
            log::print_count(&format!("Validators: {}", state.total_validators));

            log::print_section_header("Pools");
            for kind in PoolKind::ALL {
                log::print_amount(kind.name(), state.pools.get(kind));
            }
            log::print_divider();
        }
        Commands::Whoami {} => {
            log::print_message(&format!("Address: {}", signer));
            log::print_amount("Balance", handle.balance_of(signer).await);
            if let Some(session) = handle.active_session_of(signer).await {
                log::print_message(&format!("Pending Session: {}", session.id));
            }
        }
        Commands::Balance { address } => {
            let address = match address {
                Some(text) => parse_address(&text)?,
                None => signer,
            };
            log::print_message(&format!("Address: {}", address));
            log::print_amount("Balance", handle.balance_of(address).await);
        }
        Commands::GetSession { id } => match handle.session(id).await {
            Some(session) => log::print_session(&session),
            None => log::print_error("Session not found"),
        },
        Commands::GetResult { id } => match handle.result(id).await {
            Some(result) => log::print_result(&result),
            None => log::print_error("Result not found"),
        },
        Commands::GetDiscovery { id } => match handle.discovery(id).await {
            Some(discovery) => log::print_discovery(&discovery),
            None => log::print_error("Discovery not found"),
        },
        Commands::GetValidator { address } => {
            let address = parse_address(&address)?;
            match handle.validator(address).await {
                Some(validator) => log::print_validator(&validator),
                None => log::print_error("Validator not found"),
            }
        }
        Commands::Validators {} => {
            let validators = handle.read(|e| e.active_validators()).await;
            log::print_section_header("Active Validators");
            for validator in validators.iter() {
                log::print_message(&format!(
                    "{}  staked {}  reputation {}",
                    validator.address,
                    amount_to_ui(validator.staked_amount),
                    validator.reputation
                ));
            }
            log::print_count(&format!("Total: {}", validators.len()));
        }
        Commands::Export { output } => {
            let snapshot = handle.snapshot().await;
            export_json(&snapshot, &output)?;
            log::print_message(&format!("Exported ledger to {}", output.display()));
        }
        _ => {}
    }
    Ok(())
}
