use serde::{Deserialize, Serialize};
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRecord {
    pub address: Address,
    pub staked_amount: Amount,
    pub total_validations: u32,
    pub reputation: u8,
    pub is_active: bool,
    pub registration_time: i64,
}
