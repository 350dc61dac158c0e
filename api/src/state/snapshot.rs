use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::types::*;
use super::*;

/// The single persisted layout of the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: u16,
    pub clock: Clock,
    pub paused: bool,
    pub state: GlobalState,

    pub balances: BTreeMap<Address, Amount>,
    pub sessions: BTreeMap<u64, MiningSession>,
    pub results: BTreeMap<u64, PowResult>,
    pub discoveries: BTreeMap<u64, Discovery>,
    pub validators: BTreeMap<Address, ValidatorRecord>,
}
