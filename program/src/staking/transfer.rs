use log::debug;
use mined_api::prelude::*;

use crate::engine::MiningEngine;
use crate::ledger::Bucket;

impl MiningEngine {
    /// Moves circulating balance between two accounts.
    pub fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), MinedError> {
        self.ensure_running()?;
        check_condition(amount > 0, MinedError::InvalidAmount)?;

        let mut tx = self.ledger.begin();
        tx.transfer(Bucket::Account(from), Bucket::Account(to), amount)?;
        let changes = tx.commit()?;

        debug!("transfer {} -> {}: {}", from, to, amount_to_ui(amount));
        self.apply_ledger(changes);

        Ok(())
    }
}
