use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use crate::types::Amount;

#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
    IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum PoolKind {
    MiningRewards = 0,
    Staking,
    Governance,
    ResearchAccess,
    TransactionFee,
    Treasury,
    ValidatorReward,
}

impl PoolKind {
    pub const ALL: [PoolKind; 7] = [
        PoolKind::MiningRewards,
        PoolKind::Staking,
        PoolKind::Governance,
        PoolKind::ResearchAccess,
        PoolKind::TransactionFee,
        PoolKind::Treasury,
        PoolKind::ValidatorReward,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PoolKind::MiningRewards   => "mining rewards",
            PoolKind::Staking         => "staking",
            PoolKind::Governance      => "governance",
            PoolKind::ResearchAccess  => "research access",
            PoolKind::TransactionFee  => "transaction fee",
            PoolKind::Treasury        => "treasury",
            PoolKind::ValidatorReward => "validator reward",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pools {
    pub mining_rewards: Amount,
    pub staking: Amount,
    pub governance: Amount,
    pub research_access: Amount,
    pub transaction_fee: Amount,
    pub treasury: Amount,
    pub validator_reward: Amount,
}

impl Pools {
    pub fn get(&self, kind: PoolKind) -> Amount {
        match kind {
            PoolKind::MiningRewards   => self.mining_rewards,
            PoolKind::Staking         => self.staking,
            PoolKind::Governance      => self.governance,
            PoolKind::ResearchAccess  => self.research_access,
            PoolKind::TransactionFee  => self.transaction_fee,
            PoolKind::Treasury        => self.treasury,
            PoolKind::ValidatorReward => self.validator_reward,
        }
    }

    pub fn get_mut(&mut self, kind: PoolKind) -> &mut Amount {
        match kind {
            PoolKind::MiningRewards   => &mut self.mining_rewards,
            PoolKind::Staking         => &mut self.staking,
            PoolKind::Governance      => &mut self.governance,
            PoolKind::ResearchAccess  => &mut self.research_access,
            PoolKind::TransactionFee  => &mut self.transaction_fee,
            PoolKind::Treasury        => &mut self.treasury,
            PoolKind::ValidatorReward => &mut self.validator_reward,
        }
    }

    /// Sum of every pool; `None` if the sum does not fit.
    pub fn total(&self) -> Option<Amount> {
        PoolKind::ALL
            .iter()
            .try_fold(0u128, |acc, kind| acc.checked_add(self.get(*kind)))
    }
}
