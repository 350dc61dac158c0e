use anyhow::Result;
use log::info;
use tokio::task::JoinSet;

use mined_api::prelude::*;

use crate::handle::EngineHandle;
use crate::mine::{perform_mining, MiningJob, DEFAULT_MAX_ATTEMPTS};

/// Seconds the clock moves per simulated block.
pub const SIMULATED_BLOCK_SECS: i64 = 12;

#[derive(Clone, Debug, Default)]
pub struct SimulationReport {
    pub start_height: u64,
    pub end_height: u64,
    pub results: u64,
    pub emitted: Amount,
    pub burned: Amount,
    pub total_supply: Amount,
    pub earnings: Vec<(Address, Amount)>,
}

fn job_for(n: u64, difficulty: u16) -> MiningJob {
    MiningJob {
        work_type: (n % WORK_TYPE_COUNT as u64) as u8,
        difficulty,
        complexity: (10 + n * 17 % 90) as u8,
        significance: (1 + n % 10) as u8,
        max_attempts: DEFAULT_MAX_ATTEMPTS,
    }
}

/// Runs `miners` concurrent miners for `rounds` rounds. Every round is one block: all miners
/// submit one session, then the clock advances, so emission decays between rounds.
/// The ledger invariants are checked at the end.
pub async fn run_simulation(
    handle: &EngineHandle,
    miners: u64,
    rounds: u32,
    difficulty: u16,
) -> Result<SimulationReport> {
    let before = handle.state().await;
    let start_height = handle.clock().await.height;

    let mut earnings: Vec<(Address, Amount)> =
        (0..miners).map(|_| (Address(rand::random()), 0)).collect();

    for round in 0..rounds {
        let mut tasks = JoinSet::new();
        for (n, (miner, _)) in earnings.iter().enumerate() {
            let handle = handle.clone();
            let miner = *miner;
            let job = job_for(n as u64, difficulty);
            tasks.spawn(async move {
                let result = perform_mining(&handle, miner, &job).await?;
                Ok::<_, anyhow::Error>((n, result.net_reward))
            });
        }

        while let Some(joined) = tasks.join_next().await {
            let (n, net) = joined??;
            earnings[n].1 += net;
        }

        let now = handle.clock().await;
        handle
            .advance_clock(Clock::new(now.height + 1, now.unix_timestamp + SIMULATED_BLOCK_SECS))
            .await?;
        info!("simulation round {} done at height {}", round + 1, now.height + 1);
    }

    handle.check_invariants().await?;

    let after = handle.state().await;
    Ok(SimulationReport {
        start_height,
        end_height: handle.clock().await.height,
        results: after.next_result_id - before.next_result_id,
        emitted: after.cumulative_emission - before.cumulative_emission,
        burned: after.cumulative_burn - before.cumulative_burn,
        total_supply: after.total_supply,
        earnings,
    })
}
