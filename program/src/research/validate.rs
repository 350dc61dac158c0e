use log::info;
use mined_api::prelude::*;

use crate::engine::MiningEngine;
use crate::ledger::Bucket;
use crate::research::ValidationCheck;

impl MiningEngine {
    /// Counts `validator`'s vote on a discovery and pays the validation reward from the
    /// validator reward pool. Returns the discovery's validation count afterwards.
    pub fn validate_discovery(
        &mut self,
        validator: Address,
        discovery_id: u64,
    ) -> Result<u32, MinedError> {
        self.ensure_running()?;

        let record = self.validators.plan_validation(&validator)?;
        let quorum = self.config.validation_quorum;

        match self
            .discoveries
            .check_validation(discovery_id, &validator, quorum)?
        {
            ValidationCheck::QuorumReached(count) => return Ok(count),
            ValidationCheck::Accept => {}
        }

        let mut tx = self.ledger.begin();
        let reward = tx.try_pool(PoolKind::ValidatorReward, self.config.validation_reward)?;
        tx.credit(Bucket::Account(validator), reward)?;
        let changes = tx.commit()?;

        // Nothing below can fail.

        let Some(discovery) = self.discoveries.mark_validated(discovery_id, validator, quorum) else {
            return Err(MinedError::DiscoveryNotFound);
        };
        self.validators.put(record);
        self.apply_ledger(changes);

        info!(
            "discovery {} validated by {} ({}/{}), reward {}",
            discovery_id,
            validator,
            discovery.validation_count,
            quorum,
            amount_to_ui(reward)
        );

        let count = discovery.validation_count;
        self.events.push(Event::DiscoveryValidated {
            discovery,
            validator,
            reward,
        });

        Ok(count)
    }
}
