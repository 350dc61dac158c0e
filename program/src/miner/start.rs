use log::info;
use mined_api::prelude::*;

use crate::engine::MiningEngine;
use crate::tokenomics::RewardCalculator;

impl MiningEngine {
    /// Opens a puzzle session for `caller`. Returns the new session id.
    pub fn start_mining_session(
        &mut self,
        caller: Address,
        work_type: u8,
        difficulty: u16,
    ) -> Result<u64, MinedError> {
        self.ensure_running()?;

        RewardCalculator::new(&self.config).base_reward(work_type)?;
        let session = self
            .sessions
            .prepare_start(caller, work_type, difficulty, &self.clock)?;

        info!(
            "session {} started by {} (work type {}, difficulty {})",
            session.id, caller, work_type, difficulty
        );

        let id = session.id;
        self.sessions.insert(session.clone());
        self.events.push(Event::SessionStarted { session });

        Ok(id)
    }
}
