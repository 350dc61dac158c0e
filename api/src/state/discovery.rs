use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    pub id: u64,
    pub work_type: u8,
    pub complexity: u8,
    pub significance: u8,
    pub research_value: u128,
    pub researcher: Address,

    pub validation_count: u32,
    pub is_validated: bool,
    pub is_collaborative: bool,
    pub is_from_pow: bool,
    pub timestamp: i64,

    /// Validators that have already counted towards `validation_count`.
    pub validators: BTreeSet<Address>,
}
