use serde::{Deserialize, Serialize};
use crate::state::*;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakeDirection {
    Staked,
    Unstaked,
}

/// Notifications for external subscribers. Each carries the affected records as they were
/// right after the transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    SessionStarted {
        session: MiningSession,
    },
    ResultSubmitted {
        session: MiningSession,
        result: PowResult,
    },
    DiscoveryRecorded {
        discovery: Discovery,
    },
    DiscoveryValidated {
        discovery: Discovery,
        validator: Address,
        reward: Amount,
    },
    StakeChanged {
        validator: ValidatorRecord,
        direction: StakeDirection,
        amount: Amount,
    },
    Emission {
        amount: Amount,
        height: u64,
        cumulative_emission: Amount,
    },
    Burn {
        amount: Amount,
        cumulative_burn: Amount,
    },
    Paused,
    Unpaused,
}
