use log::info;
use mined_api::prelude::*;

use crate::engine::MiningEngine;
use crate::tokenomics::RewardCalculator;

impl MiningEngine {
    /// Records a discovery outside of a mining session. No reward is paid; the research value
    /// still counts towards the emission multiplier.
    pub fn submit_discovery(
        &mut self,
        caller: Address,
        work_type: u8,
        complexity: u8,
        significance: u8,
        research_value: u128,
        is_collaborative: bool,
    ) -> Result<u64, MinedError> {
        self.ensure_running()?;

        RewardCalculator::new(&self.config).base_reward(work_type)?;
        check_complexity(complexity)?;
        check_significance(significance)?;
        check_condition(
            research_value > 0 && research_value <= self.config.max_research_value,
            MinedError::InvalidAmount,
        )?;

        let mut tx = self.ledger.begin();
        tx.add_research_value(research_value)?;
        let changes = tx.commit()?;

        let discovery = self.discoveries.draft(
            caller,
            work_type,
            complexity,
            significance,
            research_value,
            is_collaborative,
            false,
            self.clock.unix_timestamp,
        );

        info!("discovery {} recorded by {}", discovery.id, caller);

        let id = discovery.id;
        self.discoveries.insert(discovery.clone());
        self.apply_ledger(changes);
        self.events.push(Event::DiscoveryRecorded { discovery });

        Ok(id)
    }
}
