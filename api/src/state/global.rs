use serde::{Deserialize, Serialize};
use crate::types::Amount;
use super::Pools;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalState {
    pub initial_supply: Amount,
    pub total_supply: Amount,
    pub total_burned: Amount,
    pub total_research_value: u128,
    pub cumulative_emission: Amount,
    pub cumulative_burn: Amount,
    pub last_emission_block: u64,

    pub next_session_id: u64,
    pub next_result_id: u64,
    pub next_discovery_id: u64,

    pub total_validators: u64,
    pub total_staked: Amount,

    pub pools: Pools,
}
