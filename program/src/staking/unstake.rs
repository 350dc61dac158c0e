use log::info;
use mined_api::prelude::*;

use crate::engine::MiningEngine;
use crate::ledger::Bucket;

impl MiningEngine {
    /// Returns `amount` of the caller's stake to their balance. Returns the remaining stake.
    pub fn unstake(&mut self, caller: Address, amount: Amount) -> Result<Amount, MinedError> {
        self.ensure_running()?;

        let record = self.validators.plan_unstake(caller, amount)?;

        let mut tx = self.ledger.begin();
        tx.sub_staked(amount)?;
        tx.transfer(
            Bucket::Pool(PoolKind::Staking),
            Bucket::Account(caller),
            amount,
        )?;
        let changes = tx.commit()?;

        info!(
            "{} unstaked {} (remaining {}, active: {})",
            caller,
            amount_to_ui(amount),
            amount_to_ui(record.staked_amount),
            record.is_active
        );

        let staked_amount = record.staked_amount;
        self.validators.put(record.clone());
        self.apply_ledger(changes);
        self.events.push(Event::StakeChanged {
            validator: record,
            direction: StakeDirection::Unstaked,
            amount,
        });

        Ok(staked_amount)
    }
}
