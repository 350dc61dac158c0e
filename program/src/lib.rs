pub mod engine;
pub mod ledger;
pub mod miner;
pub mod program;
pub mod research;
pub mod staking;
pub mod tokenomics;

pub use engine::MiningEngine;

use log::error;
use mined_api::prelude::*;

/// Routes an instruction signed by `signer` to the matching engine operation.
pub fn process_instruction(
    engine: &mut MiningEngine,
    signer: Address,
    ix: Instruction,
) -> Result<Outcome, MinedError> {
    let kind = ix.kind();

    let outcome = match ix {
        // Mining instructions
        Instruction::StartMiningSession { work_type, difficulty } => engine
            .start_mining_session(signer, work_type, difficulty)
            .map(|session_id| Outcome::SessionStarted { session_id }),
        Instruction::SubmitPowResult {
            session_id,
            nonce,
            proof_value,
            complexity,
            significance,
        } => engine
            .submit_pow_result(signer, session_id, nonce, proof_value, complexity, significance)
            .map(|result_id| Outcome::ResultSubmitted { result_id }),

        // Research instructions
        Instruction::SubmitDiscovery {
            work_type,
            complexity,
            significance,
            research_value,
            is_collaborative,
        } => engine
            .submit_discovery(
                signer,
                work_type,
                complexity,
                significance,
                research_value,
                is_collaborative,
            )
            .map(|discovery_id| Outcome::DiscoveryRecorded { discovery_id }),
        Instruction::ValidateDiscovery { discovery_id } => engine
            .validate_discovery(signer, discovery_id)
            .map(|validation_count| Outcome::DiscoveryValidated { validation_count }),

        // Staking instructions
        Instruction::Stake { amount } => engine
            .stake(signer, amount)
            .map(|staked_amount| Outcome::StakeUpdated { staked_amount }),
        Instruction::Unstake { amount } => engine
            .unstake(signer, amount)
            .map(|staked_amount| Outcome::StakeUpdated { staked_amount }),
        Instruction::Transfer { to, amount } => engine
            .transfer(signer, to, amount)
            .map(|_| Outcome::Transferred),

        // Admin instructions
        Instruction::Pause => engine.pause(signer).map(|_| Outcome::Done),
        Instruction::Unpause => engine.unpause(signer).map(|_| Outcome::Done),
        Instruction::SetValidatorActive { validator, active } => engine
            .set_validator_active(signer, validator, active)
            .map(|_| Outcome::Done),
    };

    if let Err(err) = &outcome {
        if err.is_fatal() {
            error!("{:?} from {} failed: {} (code {})", kind, signer, err, err.code());
        }
    }

    outcome
}
