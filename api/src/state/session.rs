use serde::{Deserialize, Serialize};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Pending,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningSession {
    pub id: u64,
    pub owner: Address,
    pub work_type: u8,
    pub difficulty: u16,
    pub target: ProofValue,

    pub start_time: i64,
    pub start_height: u64,
    pub end_time: Option<i64>,
    pub nonce: Option<u64>,

    pub completed: bool,
}

impl MiningSession {
    pub fn status(&self) -> SessionStatus {
        if self.completed {
            SessionStatus::Completed
        } else {
            SessionStatus::Pending
        }
    }
}
