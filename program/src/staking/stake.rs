use log::info;
use mined_api::prelude::*;

use crate::engine::MiningEngine;
use crate::ledger::Bucket;

impl MiningEngine {
    /// Moves `amount` from the caller's balance into the staking pool. Returns the new stake.
    pub fn stake(&mut self, caller: Address, amount: Amount) -> Result<Amount, MinedError> {
        self.ensure_running()?;

        let record = self.validators.plan_stake(caller, amount, &self.clock)?;

        let mut tx = self.ledger.begin();
        tx.transfer(
            Bucket::Account(caller),
            Bucket::Pool(PoolKind::Staking),
            amount,
        )?;
        tx.add_staked(amount)?;
        let changes = tx.commit()?;

        info!(
            "{} staked {} (total {}, active: {})",
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
            direction: StakeDirection::Staked,
            amount,
        });

        Ok(staked_amount)
    }
}
