use anyhow::Result;
use std::collections::HashMap;
use tokio::sync::broadcast::error::TryRecvError;

use mined_api::prelude::*;
use mined_client::{perform_mining, run_simulation, EngineHandle, MiningJob, DEFAULT_MAX_ATTEMPTS};

use crate::cli::{Cli, Commands};
use crate::log;

pub async fn handle_mine_commands(cli: Cli, handle: &EngineHandle, signer: Address) -> Result<()> {
    match cli.command {
        Commands::Mine {
            work_type,
            difficulty,
            complexity,
            significance,
            rounds,
            max_attempts,
        } => {
            let job = MiningJob {
                work_type,
                difficulty,
                complexity,
                significance,
                max_attempts: max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            };

            log::print_message(&format!(
                "Mining work type {} at difficulty {} as {}",
                work_type, difficulty, signer
            ));

            for _ in 0..rounds {
                let result = perform_mining(handle, signer, &job).await?;
                log::print_result(&result);
            }

            log::print_amount("Balance", handle.balance_of(signer).await);
        }
        Commands::Simulate {
            miners,
            rounds,
            difficulty,
        } => {
            simulate(handle, miners, rounds, difficulty).await?;
        }
        _ => {}
    }
    Ok(())
}

/// Runs a throwaway simulation on the loaded ledger. Nothing is persisted.
async fn simulate(handle: &EngineHandle, miners: u64, rounds: u32, difficulty: u16) -> Result<()> {
    let mut events = handle.subscribe();

    log::print_section_header("Simulation");
    log::print_message(&format!(
        "{} miners × {} rounds at difficulty {}",
        miners, rounds, difficulty
    ));

    let report = run_simulation(handle, miners, rounds, difficulty).await?;

    for (miner, earned) in report.earnings.iter() {
        log::print_message(&format!("{} earned {} MINED", miner, amount_to_ui(*earned)));
    }

    let mut counts: HashMap<&'static str, u64> = HashMap::new();
    loop {
        let event = match events.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        };
        let name = match event {
            Event::SessionStarted { .. } => "sessions started",
            Event::ResultSubmitted { .. } => "results submitted",
            Event::Emission { .. } => "emissions",
            Event::Burn { .. } => "burns",
            _ => "other",
        };
        *counts.entry(name).or_default() += 1;
    }

    log::print_section_header("Supply");
    log::print_count(&format!("Blocks: {} → {}", report.start_height, report.end_height));
    log::print_amount("Emitted", report.emitted);
    log::print_amount("Burned", report.burned);
    log::print_amount("Total Supply", report.total_supply);
    for (name, count) in counts.iter() {
        log::print_count(&format!("{}: {}", name, count));
    }
    log::print_message("Invariants hold");

    Ok(())
}
