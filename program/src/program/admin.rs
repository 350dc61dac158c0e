use log::{info, warn};
use mined_api::prelude::*;

use crate::engine::MiningEngine;

impl MiningEngine {
    /// Moves the logical clock forward. Works while paused.
    pub fn advance_clock(&mut self, clock: Clock) -> Result<(), MinedError> {
        check_condition(
            clock.height >= self.clock.height && clock.unix_timestamp >= self.clock.unix_timestamp,
            MinedError::ClockRegression,
        )?;
        self.clock = clock;
        Ok(())
    }

    pub fn pause(&mut self, caller: Address) -> Result<(), MinedError> {
        self.ensure_admin(&caller)?;
        self.ensure_running()?;

        warn!("engine paused by {}", caller);
        self.paused = true;
        self.events.push(Event::Paused);
        Ok(())
    }

    pub fn unpause(&mut self, caller: Address) -> Result<(), MinedError> {
        self.ensure_admin(&caller)?;
        if !self.paused {
            return Ok(());
        }

        info!("engine unpaused by {}", caller);
        self.paused = false;
        self.events.push(Event::Unpaused);
        Ok(())
    }

    pub fn set_validator_active(
        &mut self,
        caller: Address,
        validator: Address,
        active: bool,
    ) -> Result<(), MinedError> {
        self.ensure_admin(&caller)?;
        self.ensure_running()?;

        let record = self.validators.plan_set_active(&validator, active)?;
        info!("validator {} set active: {}", validator, active);
        self.validators.put(record);
        Ok(())
    }
}
