use mined_api::prelude::*;

/// Share of a reward that is destroyed instead of paid out.
pub struct BurnModel<'a> {
    config: &'a TokenomicsConfig,
}

impl<'a> BurnModel<'a> {
    pub fn new(config: &'a TokenomicsConfig) -> Self {
        Self { config }
    }

    /// Burn percentage: significance tier + complexity / divisor + collaborative bonus, capped.
    pub fn burn_rate(
        &self,
        significance: u8,
        complexity: u8,
        is_collaborative: bool,
    ) -> Result<u8, MinedError> {
        check_significance(significance)?;
        check_complexity(complexity)?;

        let base = self
            .config
            .burn_base_rates
            .lookup(significance)
            .ok_or(MinedError::InvalidSignificance)?;
        let complexity_part = (complexity / self.config.complexity_burn_divisor) as u32;
        let collaborative_part = if is_collaborative {
            self.config.collaborative_burn_bonus as u32
        } else {
            0
        };

        let rate = base
            .saturating_add(complexity_part)
            .saturating_add(collaborative_part)
            .min(self.config.max_burn_percent as u32);

        Ok(rate as u8)
    }

    pub fn burn_amount(&self, gross: Amount, rate: u8) -> Result<Amount, MinedError> {
        gross
            .checked_mul(rate as u128)
            .map(|v| v / 100)
            .ok_or(MinedError::RewardOverflow)
    }
}
