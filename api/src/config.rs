use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::MinedError;
use crate::types::*;
use crate::utils::check_condition;

/// One step of a tier table: every input up to and including `upper` maps to `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub upper: u8,
    pub value: u32,
}

/// A sorted breakpoint table. Lookups return the value of the first tier whose upper bound
/// covers the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable(Vec<Tier>);

impl TierTable {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self(tiers)
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.0
    }

    pub fn lookup(&self, input: u8) -> Option<u32> {
        let idx = self.0.partition_point(|tier| tier.upper < input);
        self.0.get(idx).map(|tier| tier.value)
    }

    /// Checks the table is strictly sorted by bound, non-decreasing in value, and covers
    /// every input up to `max_input`.
    pub fn validate(&self, max_input: u8) -> Result<(), MinedError> {
        check_condition(!self.0.is_empty(), MinedError::InvalidConfig)?;

        for pair in self.0.windows(2) {
            check_condition(pair[0].upper < pair[1].upper, MinedError::InvalidConfig)?;
            check_condition(pair[0].value <= pair[1].value, MinedError::InvalidConfig)?;
        }

        let last = self.0[self.0.len() - 1];
        check_condition(last.upper >= max_input, MinedError::InvalidConfig)
    }
}

fn tiers(pairs: &[(u8, u32)]) -> TierTable {
    TierTable::new(
        pairs
            .iter()
            .map(|&(upper, value)| Tier { upper, value })
            .collect(),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeConfig {
    pub base_reward: Amount,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofMode {
    /// Accept the caller's proof value as-is and only check it against the target.
    Trusted,
    /// Re-derive the proof value with the engine's hasher and reject mismatches.
    Recompute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisValidator {
    pub address: Address,
    pub stake: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenomicsConfig {
    pub admin: Address,
    pub initial_supply: Amount,

    pub mining_pool_bps: u16,
    pub staking_pool_bps: u16,
    pub governance_pool_bps: u16,
    pub research_access_pool_bps: u16,
    pub transaction_fee_pool_bps: u16,
    pub treasury_pool_bps: u16,
    pub validator_reward_pool_bps: u16,

    pub work_types: Vec<WorkTypeConfig>,
    pub complexity_multipliers: TierTable,
    pub significance_multipliers: TierTable,
    pub reward_scale: u128,
    pub research_scale: u128,
    /// Upper bound on a directly submitted discovery's research value.
    pub max_research_value: u128,

    pub burn_base_rates: TierTable,
    pub complexity_burn_divisor: u8,
    pub collaborative_burn_bonus: u8,
    pub max_burn_percent: u8,

    pub initial_emission: Amount,
    pub decay_per_block_ppm: u32,
    pub research_alpha_ppm: u32,
    pub max_research_bonus_bps: u16,

    pub genesis_validators: Vec<GenesisValidator>,
    pub min_validator_stake: Amount,
    pub initial_reputation: u8,
    pub max_reputation: u8,
    pub validation_quorum: u32,
    pub validation_reward: Amount,

    pub proof_mode: ProofMode,
}

impl Default for TokenomicsConfig {
    fn default() -> Self {
        let work_types = (0..WORK_TYPE_COUNT as u128)
            .map(|w| WorkTypeConfig {
                base_reward: (BASE_REWARD_MAX - BASE_REWARD_STEP * w) * BASE_REWARD_UNIT,
                active: true,
            })
            .collect();

        let genesis_validators = (1..=GENESIS_VALIDATOR_COUNT as u64)
            .map(|n| GenesisValidator {
                address: Address::from_low_u64(n),
                stake: GENESIS_VALIDATOR_STAKE,
            })
            .collect();

        Self {
            admin: Address::from_low_u64(0xad),
            initial_supply: INITIAL_SUPPLY,

            mining_pool_bps: MINING_POOL_BPS,
            staking_pool_bps: STAKING_POOL_BPS,
            governance_pool_bps: GOVERNANCE_POOL_BPS,
            research_access_pool_bps: RESEARCH_ACCESS_POOL_BPS,
            transaction_fee_pool_bps: TRANSACTION_FEE_POOL_BPS,
            treasury_pool_bps: TREASURY_POOL_BPS,
            validator_reward_pool_bps: VALIDATOR_REWARD_POOL_BPS,

            work_types,
            // Multipliers are expressed in tenths (10 = 1.0x).
            complexity_multipliers: tiers(&[(20, 10), (40, 25), (60, 50), (80, 75), (100, 100)]),
            // standard / collaborative / major / millennium
            significance_multipliers: tiers(&[(4, 10), (7, 30), (9, 150), (10, 250)]),
            reward_scale: REWARD_SCALE,
            research_scale: RESEARCH_SCALE,
            max_research_value: MAX_RESEARCH_VALUE,

            burn_base_rates: tiers(&[(7, 5), (9, 25), (10, 40)]),
            complexity_burn_divisor: COMPLEXITY_BURN_DIVISOR,
            collaborative_burn_bonus: COLLABORATIVE_BURN_BONUS,
            max_burn_percent: MAX_BURN_PERCENT,

            initial_emission: INITIAL_EMISSION,
            decay_per_block_ppm: DECAY_PER_BLOCK_PPM,
            research_alpha_ppm: RESEARCH_ALPHA_PPM,
            max_research_bonus_bps: MAX_RESEARCH_BONUS_BPS,

            genesis_validators,
            min_validator_stake: MIN_VALIDATOR_STAKE,
            initial_reputation: INITIAL_REPUTATION,
            max_reputation: MAX_REPUTATION,
            validation_quorum: VALIDATION_QUORUM,
            validation_reward: VALIDATION_REWARD,

            proof_mode: ProofMode::Trusted,
        }
    }
}

impl TokenomicsConfig {
    pub fn pool_allocations_bps(&self) -> [u16; 7] {
        [
            self.mining_pool_bps,
            self.staking_pool_bps,
            self.governance_pool_bps,
            self.research_access_pool_bps,
            self.transaction_fee_pool_bps,
            self.treasury_pool_bps,
            self.validator_reward_pool_bps,
        ]
    }

    pub fn work_type(&self, work_type: u8) -> Option<&WorkTypeConfig> {
        self.work_types.get(work_type as usize)
    }

    pub fn validate(&self) -> Result<(), MinedError> {
        let allocated: u32 = self
            .pool_allocations_bps()
            .iter()
            .map(|bps| *bps as u32)
            .sum();
        check_condition(allocated as u128 <= BPS_DENOMINATOR, MinedError::InvalidConfig)?;

        check_condition(
            !self.work_types.is_empty() && self.work_types.len() <= WORK_TYPE_COUNT,
            MinedError::InvalidConfig,
        )?;

        self.complexity_multipliers.validate(MAX_COMPLEXITY)?;
        self.significance_multipliers.validate(MAX_SIGNIFICANCE)?;
        self.burn_base_rates.validate(MAX_SIGNIFICANCE)?;

        check_condition(self.reward_scale > 0, MinedError::InvalidConfig)?;
        check_condition(self.research_scale > 0, MinedError::InvalidConfig)?;
        check_condition(self.complexity_burn_divisor > 0, MinedError::InvalidConfig)?;
        check_condition(self.max_burn_percent <= 100, MinedError::InvalidConfig)?;

        check_condition(self.max_research_value > 0, MinedError::InvalidConfig)?;

        // Emission must be computable at its largest (no decay, full research bonus).
        check_condition(self.initial_emission > 0, MinedError::InvalidConfig)?;
        check_condition(
            self.max_research_bonus_bps <= MAX_RESEARCH_BONUS_BPS,
            MinedError::InvalidConfig,
        )?;
        check_condition(
            self.initial_emission
                .checked_mul(BPS_DENOMINATOR + self.max_research_bonus_bps as u128)
                .is_some(),
            MinedError::InvalidConfig,
        )?;

        // Decay must stay strictly inside (0, 1] per block.
        check_condition(
            (self.decay_per_block_ppm as u128) < PPM_DENOMINATOR,
            MinedError::InvalidConfig,
        )?;

        check_condition(self.validation_quorum > 0, MinedError::InvalidConfig)?;
        check_condition(
            self.initial_reputation <= self.max_reputation,
            MinedError::InvalidConfig,
        )?;

        let staked: Option<Amount> = self
            .genesis_validators
            .iter()
            .try_fold(0u128, |acc, v| acc.checked_add(v.stake));
        let staking_pool = self
            .initial_supply
            .checked_mul(self.staking_pool_bps as u128)
            .map(|v| v / BPS_DENOMINATOR);
        match (staked, staking_pool) {
            (Some(staked), Some(pool)) => check_condition(staked <= pool, MinedError::InvalidConfig),
            _ => Err(MinedError::InvalidConfig),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TokenomicsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.work_types.len(), WORK_TYPE_COUNT);
        assert_eq!(config.work_types[0].base_reward, 1_000 * BASE_REWARD_UNIT);
        assert_eq!(config.work_types[24].base_reward, 400 * BASE_REWARD_UNIT);
    }

    #[test]
    fn tier_lookup_uses_inclusive_upper_bounds() {
        let table = TokenomicsConfig::default().complexity_multipliers;
        assert_eq!(table.lookup(1), Some(10));
        assert_eq!(table.lookup(20), Some(10));
        assert_eq!(table.lookup(21), Some(25));
        assert_eq!(table.lookup(100), Some(100));
        assert_eq!(table.lookup(101), None);
    }

    #[test]
    fn tier_table_rejects_bad_shapes() {
        let unsorted = tiers(&[(40, 10), (20, 25), (100, 50)]);
        assert_eq!(unsorted.validate(100), Err(MinedError::InvalidConfig));

        let decreasing = tiers(&[(20, 50), (100, 10)]);
        assert_eq!(decreasing.validate(100), Err(MinedError::InvalidConfig));

        let short = tiers(&[(20, 10), (80, 20)]);
        assert_eq!(short.validate(100), Err(MinedError::InvalidConfig));

        assert_eq!(TierTable::new(vec![]).validate(100), Err(MinedError::InvalidConfig));
    }

    #[test]
    fn config_round_trips_through_json_with_defaults() {
        let json = r#"{ "validation_quorum": 5, "proof_mode": "Recompute" }"#;
        let config: TokenomicsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.validation_quorum, 5);
        assert_eq!(config.proof_mode, ProofMode::Recompute);
        assert_eq!(config.initial_supply, INITIAL_SUPPLY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_research_bonus_is_rejected() {
        let config = TokenomicsConfig {
            max_research_bonus_bps: MAX_RESEARCH_BONUS_BPS + 1,
            ..TokenomicsConfig::default()
        };
        assert_eq!(config.validate(), Err(MinedError::InvalidConfig));
    }

    #[test]
    fn uncomputable_emission_is_rejected() {
        let huge = TokenomicsConfig {
            initial_emission: u128::MAX / 2,
            ..TokenomicsConfig::default()
        };
        assert_eq!(huge.validate(), Err(MinedError::InvalidConfig));

        let zero = TokenomicsConfig {
            initial_emission: 0,
            ..TokenomicsConfig::default()
        };
        assert_eq!(zero.validate(), Err(MinedError::InvalidConfig));
    }

    #[test]
    fn research_value_cap_must_be_positive() {
        let config = TokenomicsConfig {
            max_research_value: 0,
            ..TokenomicsConfig::default()
        };
        assert_eq!(config.validate(), Err(MinedError::InvalidConfig));
        assert_eq!(TokenomicsConfig::default().max_research_value, 100_000);
    }

    #[test]
    fn over_allocated_pools_are_rejected() {
        let config = TokenomicsConfig {
            treasury_pool_bps: 9_000,
            ..TokenomicsConfig::default()
        };
        assert_eq!(config.validate(), Err(MinedError::InvalidConfig));
    }
}
