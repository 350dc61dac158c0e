use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use crate::types::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum InstructionType {
    Unknown = 0,

    // Mining instructions
    StartMiningSession,
    SubmitPowResult,

    // Research instructions
    SubmitDiscovery,
    ValidateDiscovery,

    // Staking instructions
    Stake,
    Unstake,
    Transfer,

    // Admin instructions
    Pause,
    Unpause,
    SetValidatorActive,
}

/// Every state-changing request the engine accepts. The signer is supplied alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    StartMiningSession {
        work_type: u8,
        difficulty: u16,
    },
    SubmitPowResult {
        session_id: u64,
        nonce: u64,
        proof_value: ProofValue,
        complexity: u8,
        significance: u8,
    },
    SubmitDiscovery {
        work_type: u8,
        complexity: u8,
        significance: u8,
        research_value: u128,
        is_collaborative: bool,
    },
    ValidateDiscovery {
        discovery_id: u64,
    },
    Stake {
        amount: Amount,
    },
    Unstake {
        amount: Amount,
    },
    Transfer {
        to: Address,
        amount: Amount,
    },
    Pause,
    Unpause,
    SetValidatorActive {
        validator: Address,
        active: bool,
    },
}

impl Instruction {
    pub fn kind(&self) -> InstructionType {
        match self {
            Instruction::StartMiningSession { .. } => InstructionType::StartMiningSession,
            Instruction::SubmitPowResult { .. }    => InstructionType::SubmitPowResult,
            Instruction::SubmitDiscovery { .. }    => InstructionType::SubmitDiscovery,
            Instruction::ValidateDiscovery { .. }  => InstructionType::ValidateDiscovery,
            Instruction::Stake { .. }              => InstructionType::Stake,
            Instruction::Unstake { .. }            => InstructionType::Unstake,
            Instruction::Transfer { .. }           => InstructionType::Transfer,
            Instruction::Pause                     => InstructionType::Pause,
            Instruction::Unpause                   => InstructionType::Unpause,
            Instruction::SetValidatorActive { .. } => InstructionType::SetValidatorActive,
        }
    }
}

/// What a successfully processed instruction produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    SessionStarted { session_id: u64 },
    ResultSubmitted { result_id: u64 },
    DiscoveryRecorded { discovery_id: u64 },
    DiscoveryValidated { validation_count: u32 },
    StakeUpdated { staked_amount: Amount },
    Transferred,
    Done,
}
