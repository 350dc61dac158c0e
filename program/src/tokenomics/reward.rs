use log::error;
use mined_api::prelude::*;

/// Inputs and intermediate factors of a reward, kept for results and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardBreakdown {
    pub base_reward: Amount,
    pub complexity_multiplier: u32,
    pub significance_multiplier: u32,
    pub research_value: u128,
    pub gross: Amount,
}

/// gross = base[work_type] × complexity_multiplier × significance_multiplier × research_value / reward_scale
pub struct RewardCalculator<'a> {
    config: &'a TokenomicsConfig,
}

impl<'a> RewardCalculator<'a> {
    pub fn new(config: &'a TokenomicsConfig) -> Self {
        Self { config }
    }

    /// Base reward of an active work type.
    pub fn base_reward(&self, work_type: u8) -> Result<Amount, MinedError> {
        match self.config.work_type(work_type) {
            Some(entry) if entry.active => Ok(entry.base_reward),
            _ => Err(MinedError::InvalidWorkType),
        }
    }

    pub fn complexity_multiplier(&self, complexity: u8) -> Result<u32, MinedError> {
        check_complexity(complexity)?;
        self.config
            .complexity_multipliers
            .lookup(complexity)
            .ok_or(MinedError::InvalidComplexity)
    }

    pub fn significance_multiplier(&self, significance: u8) -> Result<u32, MinedError> {
        check_significance(significance)?;
        self.config
            .significance_multipliers
            .lookup(significance)
            .ok_or(MinedError::InvalidSignificance)
    }

    pub fn research_value(&self, complexity: u8, significance: u8) -> Result<u128, MinedError> {
        compute_research_value(complexity, significance, self.config.research_scale)
    }

    pub fn gross_reward(
        &self,
        work_type: u8,
        complexity: u8,
        significance: u8,
    ) -> Result<RewardBreakdown, MinedError> {
        let base_reward = self.base_reward(work_type)?;
        let complexity_multiplier = self.complexity_multiplier(complexity)?;
        let significance_multiplier = self.significance_multiplier(significance)?;
        let research_value = self.research_value(complexity, significance)?;

        let gross = base_reward
            .checked_mul(complexity_multiplier as u128)
            .and_then(|v| v.checked_mul(significance_multiplier as u128))
            .and_then(|v| v.checked_mul(research_value))
            .map(|v| v / self.config.reward_scale)
            .ok_or_else(|| {
                error!(
                    "reward overflow: work_type={} complexity={} significance={}",
                    work_type, complexity, significance
                );
                MinedError::RewardOverflow
            })?;

        Ok(RewardBreakdown {
            base_reward,
            complexity_multiplier,
            significance_multiplier,
            research_value,
            gross,
        })
    }
}
