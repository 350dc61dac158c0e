use serde::{Deserialize, Serialize};
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowResult {
    pub id: u64,
    pub session_id: u64,
    pub proof_value: ProofValue,
    pub complexity: u8,
    pub significance: u8,
    pub valid: bool,

    pub gross_reward: Amount,
    pub burned: Amount,
    pub net_reward: Amount,
    pub discovery_id: u64,
}
