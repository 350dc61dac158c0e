use std::collections::{BTreeMap, BTreeSet};

use mined_api::prelude::*;

/// What a validation request would do to a discovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationCheck {
    /// Quorum already reached; nothing changes.
    QuorumReached(u32),
    /// The validator's vote counts.
    Accept,
}

#[derive(Clone, Debug)]
pub struct DiscoveryRepository {
    discoveries: BTreeMap<u64, Discovery>,
    next_discovery_id: u64,
}

impl Default for DiscoveryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoveryRepository {
    pub fn new() -> Self {
        Self {
            discoveries: BTreeMap::new(),
            next_discovery_id: 1,
        }
    }

    pub fn restore(
        discoveries: BTreeMap<u64, Discovery>,
        next_discovery_id: u64,
    ) -> Result<Self, MinedError> {
        for (id, discovery) in discoveries.iter() {
            check_condition(
                *id == discovery.id
                    && *id < next_discovery_id
                    && discovery.validation_count as usize == discovery.validators.len(),
                MinedError::InvariantViolation,
            )?;
        }

        Ok(Self {
            discoveries,
            next_discovery_id,
        })
    }

    pub fn get(&self, id: u64) -> Option<&Discovery> {
        self.discoveries.get(&id)
    }

    pub fn discoveries(&self) -> &BTreeMap<u64, Discovery> {
        &self.discoveries
    }

    pub fn next_discovery_id(&self) -> u64 {
        self.next_discovery_id
    }

    /// Builds the next discovery record without storing it.
    #[allow(clippy::too_many_arguments)]
    pub fn draft(
        &self,
        researcher: Address,
        work_type: u8,
        complexity: u8,
        significance: u8,
        research_value: u128,
        is_collaborative: bool,
        is_from_pow: bool,
        timestamp: i64,
    ) -> Discovery {
        Discovery {
            id: self.next_discovery_id,
            work_type,
            complexity,
            significance,
            research_value,
            researcher,
            validation_count: 0,
            is_validated: false,
            is_collaborative,
            is_from_pow,
            timestamp,
            validators: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, discovery: Discovery) {
        self.next_discovery_id = self.next_discovery_id.max(discovery.id + 1);
        self.discoveries.insert(discovery.id, discovery);
    }

    pub fn check_validation(
        &self,
        id: u64,
        validator: &Address,
        quorum: u32,
    ) -> Result<ValidationCheck, MinedError> {
        let discovery = self
            .discoveries
            .get(&id)
            .ok_or(MinedError::DiscoveryNotFound)?;

        if discovery.validation_count >= quorum {
            return Ok(ValidationCheck::QuorumReached(discovery.validation_count));
        }

        check_condition(
            !discovery.validators.contains(validator),
            MinedError::AlreadyValidated,
        )?;

        Ok(ValidationCheck::Accept)
    }

    /// Counts a vote accepted by [`Self::check_validation`]. Returns the updated record.
    pub fn mark_validated(&mut self, id: u64, validator: Address, quorum: u32) -> Option<Discovery> {
        let discovery = self.discoveries.get_mut(&id)?;
        if discovery.validators.insert(validator) {
            discovery.validation_count += 1;
        }
        if discovery.validation_count >= quorum {
            discovery.is_validated = true;
        }
        Some(discovery.clone())
    }
}
