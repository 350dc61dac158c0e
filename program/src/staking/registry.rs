use std::collections::BTreeMap;

use mined_api::prelude::*;

/// Validator records: stake, reputation and activity.
#[derive(Clone, Debug)]
pub struct ValidatorStakingRegistry {
    validators: BTreeMap<Address, ValidatorRecord>,
    min_stake: Amount,
    initial_reputation: u8,
    max_reputation: u8,
}

impl ValidatorStakingRegistry {
    pub fn new(config: &TokenomicsConfig) -> Self {
        Self {
            validators: BTreeMap::new(),
            min_stake: config.min_validator_stake,
            initial_reputation: config.initial_reputation,
            max_reputation: config.max_reputation,
        }
    }

    /// Registers the configured genesis validators. Their stake is already held by the staking
    /// pool, so only the records are created.
    pub fn genesis(config: &TokenomicsConfig, clock: &Clock) -> Result<Self, MinedError> {
        let mut registry = Self::new(config);

        for entry in config.genesis_validators.iter() {
            check_condition(
                !registry.validators.contains_key(&entry.address),
                MinedError::InvalidConfig,
            )?;
            let record = ValidatorRecord {
                address: entry.address,
                staked_amount: entry.stake,
                total_validations: 0,
                reputation: registry.initial_reputation,
                is_active: entry.stake >= registry.min_stake,
                registration_time: clock.unix_timestamp,
            };
            registry.validators.insert(entry.address, record);
        }

        Ok(registry)
    }

    pub fn restore(
        config: &TokenomicsConfig,
        validators: BTreeMap<Address, ValidatorRecord>,
    ) -> Result<Self, MinedError> {
        for (address, record) in validators.iter() {
            check_condition(*address == record.address, MinedError::InvariantViolation)?;
        }

        Ok(Self {
            validators,
            ..Self::new(config)
        })
    }

    pub fn get(&self, address: &Address) -> Option<&ValidatorRecord> {
        self.validators.get(address)
    }

    pub fn validators(&self) -> &BTreeMap<Address, ValidatorRecord> {
        &self.validators
    }

    pub fn active(&self) -> impl Iterator<Item = &ValidatorRecord> {
        self.validators.values().filter(|v| v.is_active)
    }

    pub fn count(&self) -> u64 {
        self.validators.len() as u64
    }

    pub fn staked_of(&self, address: &Address) -> Amount {
        self.validators
            .get(address)
            .map(|v| v.staked_amount)
            .unwrap_or(0)
    }

    pub fn total_staked(&self) -> Option<Amount> {
        self.validators
            .values()
            .try_fold(0u128, |acc, v| acc.checked_add(v.staked_amount))
    }

    /// The record after `address` stakes `amount` more. New stakers get a fresh record.
    pub fn plan_stake(
        &self,
        address: Address,
        amount: Amount,
        clock: &Clock,
    ) -> Result<ValidatorRecord, MinedError> {
        check_condition(amount > 0, MinedError::InvalidAmount)?;

        let mut record = self.validators.get(&address).cloned().unwrap_or(ValidatorRecord {
            address,
            staked_amount: 0,
            total_validations: 0,
            reputation: self.initial_reputation,
            is_active: false,
            registration_time: clock.unix_timestamp,
        });

        record.staked_amount = record
            .staked_amount
            .checked_add(amount)
            .ok_or(MinedError::ArithmeticOverflow)?;
        if record.staked_amount >= self.min_stake {
            record.is_active = true;
        }

        Ok(record)
    }

    /// The record after `address` withdraws `amount`. Falling below the minimum deactivates.
    pub fn plan_unstake(&self, address: Address, amount: Amount) -> Result<ValidatorRecord, MinedError> {
        check_condition(amount > 0, MinedError::InvalidAmount)?;

        let mut record = self
            .validators
            .get(&address)
            .cloned()
            .ok_or(MinedError::InsufficientStake)?;

        record.staked_amount = record
            .staked_amount
            .checked_sub(amount)
            .ok_or(MinedError::InsufficientStake)?;
        if record.staked_amount < self.min_stake {
            record.is_active = false;
        }

        Ok(record)
    }

    /// The record after an accepted validation vote.
    pub fn plan_validation(&self, address: &Address) -> Result<ValidatorRecord, MinedError> {
        let mut record = self.check_active(address)?.clone();
        record.total_validations = record.total_validations.saturating_add(1);
        record.reputation = record.reputation.saturating_add(1).min(self.max_reputation);
        Ok(record)
    }

    pub fn check_active(&self, address: &Address) -> Result<&ValidatorRecord, MinedError> {
        let record = self
            .validators
            .get(address)
            .ok_or(MinedError::ValidatorNotFound)?;
        check_condition(record.is_active, MinedError::ValidatorInactive)?;
        Ok(record)
    }

    pub fn plan_set_active(&self, address: &Address, active: bool) -> Result<ValidatorRecord, MinedError> {
        let mut record = self
            .validators
            .get(address)
            .cloned()
            .ok_or(MinedError::ValidatorNotFound)?;
        if active {
            check_condition(record.staked_amount >= self.min_stake, MinedError::InsufficientStake)?;
        }
        record.is_active = active;
        Ok(record)
    }

    pub fn put(&mut self, record: ValidatorRecord) {
        self.validators.insert(record.address, record);
    }
}
