use anyhow::{anyhow, Result};
use log::{debug, info};
use mined_api::prelude::*;
use rand::Rng;

use crate::handle::EngineHandle;

pub const DEFAULT_MAX_ATTEMPTS: u64 = 1 << 24;

/// What to mine and how hard to try.
#[derive(Clone, Copy, Debug)]
pub struct MiningJob {
    pub work_type: u8,
    pub difficulty: u16,
    pub complexity: u8,
    pub significance: u8,
    pub max_attempts: u64,
}

/// Scans nonces from `start_nonce` until the derived proof meets `target`, giving up after
/// `max_attempts`.
pub fn solve(
    hasher: &dyn ProofHasher,
    session_id: u64,
    target: ProofValue,
    complexity: u8,
    significance: u8,
    start_nonce: u64,
    max_attempts: u64,
) -> Option<(u64, ProofValue)> {
    let mut nonce = start_nonce;

    for _ in 0..max_attempts {
        let proof = hasher.derive(session_id, nonce, complexity, significance);
        if proof <= target {
            return Some((nonce, proof));
        }
        nonce = nonce.wrapping_add(1);
    }

    None
}

/// Opens a session (or resumes the miner's pending one), solves it off the async runtime and
/// submits the proof. Returns the accepted result.
pub async fn perform_mining(
    handle: &EngineHandle,
    miner: Address,
    job: &MiningJob,
) -> Result<PowResult> {
    let session = match handle.active_session_of(miner).await {
        Some(session) => {
            debug!("resuming session {} for {}", session.id, miner);
            session
        }
        None => {
            let outcome = handle
                .execute(
                    miner,
                    Instruction::StartMiningSession {
                        work_type: job.work_type,
                        difficulty: job.difficulty,
                    },
                )
                .await?;
            let Outcome::SessionStarted { session_id } = outcome else {
                return Err(anyhow!("unexpected outcome: {:?}", outcome));
            };
            handle
                .session(session_id)
                .await
                .ok_or_else(|| anyhow!("session {} vanished", session_id))?
        }
    };

    let hasher = handle.hasher().await;
    let start_nonce = rand::thread_rng().gen_range(0..u64::MAX / 2);
    let (session_id, target) = (session.id, session.target);
    let (complexity, significance, max_attempts) =
        (job.complexity, job.significance, job.max_attempts);

    let solution = tokio::task::spawn_blocking(move || {
        solve(
            hasher.as_ref(),
            session_id,
            target,
            complexity,
            significance,
            start_nonce,
            max_attempts,
        )
    })
    .await?;

    let (nonce, proof_value) = solution.ok_or_else(|| {
        anyhow!(
            "no solution for session {} within {} attempts",
            session_id,
            max_attempts
        )
    })?;

    let outcome = handle
        .execute(
            miner,
            Instruction::SubmitPowResult {
                session_id,
                nonce,
                proof_value,
                complexity,
                significance,
            },
        )
        .await?;
    let Outcome::ResultSubmitted { result_id } = outcome else {
        return Err(anyhow!("unexpected outcome: {:?}", outcome));
    };

    let result = handle
        .result(result_id)
        .await
        .ok_or_else(|| anyhow!("result {} vanished", result_id))?;

    info!(
        "{} mined session {} (nonce {}), net reward {}",
        miner,
        session_id,
        nonce,
        amount_to_ui(result.net_reward)
    );

    Ok(result)
}
