use std::collections::BTreeMap;
use std::sync::Arc;

use log::{error, info};
use mined_api::prelude::*;

use crate::ledger::{Changeset, Ledger};
use crate::miner::MiningSessionRegistry;
use crate::research::DiscoveryRepository;
use crate::staking::ValidatorStakingRegistry;

/// The single mutation path over the ledger. Every operation validates first, stages its ledger
/// writes in a transaction, and only touches state once nothing can fail anymore.
#[derive(Clone)]
pub struct MiningEngine {
    pub(crate) config: TokenomicsConfig,
    pub(crate) hasher: Arc<dyn ProofHasher>,
    pub(crate) clock: Clock,
    pub(crate) paused: bool,

    pub(crate) ledger: Ledger,
    pub(crate) sessions: MiningSessionRegistry,
    pub(crate) discoveries: DiscoveryRepository,
    pub(crate) validators: ValidatorStakingRegistry,

    pub(crate) events: Vec<Event>,
}

impl std::fmt::Debug for MiningEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiningEngine")
            .field("clock", &self.clock)
            .field("paused", &self.paused)
            .field("total_supply", &self.ledger.total_supply())
            .field("sessions", &self.sessions.sessions().len())
            .field("discoveries", &self.discoveries.discoveries().len())
            .field("validators", &self.validators.count())
            .finish()
    }
}

impl MiningEngine {
    /// Builds a genesis ledger at height 0.
    pub fn new(config: TokenomicsConfig) -> Result<Self, MinedError> {
        Self::with_clock(config, Clock::default())
    }

    pub fn with_clock(config: TokenomicsConfig, clock: Clock) -> Result<Self, MinedError> {
        config.validate()?;

        let validators = ValidatorStakingRegistry::genesis(&config, &clock)?;
        let genesis_staked = validators
            .total_staked()
            .ok_or(MinedError::InvalidConfig)?;
        let ledger = Ledger::genesis(&config, genesis_staked)?;

        info!(
            "genesis: supply {} MINED, {} validators",
            amount_to_ui(ledger.total_supply()),
            validators.count()
        );

        Ok(Self {
            config,
            hasher: Arc::new(Keccak256Hasher),
            clock,
            paused: false,
            ledger,
            sessions: MiningSessionRegistry::new(),
            discoveries: DiscoveryRepository::new(),
            validators,
            events: Vec::new(),
        })
    }

    /// Replaces the proof hasher used in [`ProofMode::Recompute`].
    pub fn with_hasher(mut self, hasher: Arc<dyn ProofHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn config(&self) -> &TokenomicsConfig {
        &self.config
    }

    pub fn hasher(&self) -> Arc<dyn ProofHasher> {
        self.hasher.clone()
    }

    pub fn admin(&self) -> Address {
        self.config.admin
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // -- Reads --

    pub fn session(&self, id: u64) -> Option<&MiningSession> {
        self.sessions.session(id)
    }

    pub fn active_session_of(&self, owner: &Address) -> Option<&MiningSession> {
        self.sessions.active_session_of(owner)
    }

    pub fn result(&self, id: u64) -> Option<&PowResult> {
        self.sessions.result(id)
    }

    pub fn discovery(&self, id: u64) -> Option<&Discovery> {
        self.discoveries.get(id)
    }

    pub fn validator(&self, address: &Address) -> Option<&ValidatorRecord> {
        self.validators.get(address)
    }

    pub fn active_validators(&self) -> Vec<ValidatorRecord> {
        self.validators.active().cloned().collect()
    }

    pub fn balance_of(&self, address: &Address) -> Amount {
        self.ledger.balance_of(address)
    }

    pub fn pools(&self) -> Pools {
        *self.ledger.pools()
    }

    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    pub fn total_staked(&self) -> Amount {
        self.ledger.total_staked()
    }

    pub fn total_research_value(&self) -> u128 {
        self.ledger.total_research_value()
    }

    pub fn total_burned(&self) -> Amount {
        self.ledger.total_burned()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Aggregate counters, assembled from the ledger and the registries.
    pub fn state(&self) -> GlobalState {
        GlobalState {
            initial_supply: self.ledger.initial_supply(),
            total_supply: self.ledger.total_supply(),
            total_burned: self.ledger.total_burned(),
            total_research_value: self.ledger.total_research_value(),
            cumulative_emission: self.ledger.cumulative_emission(),
            cumulative_burn: self.ledger.cumulative_burn(),
            last_emission_block: self.ledger.last_emission_block(),
            next_session_id: self.sessions.next_session_id(),
            next_result_id: self.sessions.next_result_id(),
            next_discovery_id: self.discoveries.next_discovery_id(),
            total_validators: self.validators.count(),
            total_staked: self.ledger.total_staked(),
            pools: *self.ledger.pools(),
        }
    }

    /// Full invariant sweep over the ledger and the registries.
    pub fn check_invariants(&self) -> Result<(), MinedError> {
        self.ledger.check_invariants()?;

        // total staked == sum of validator stakes
        check_condition(
            self.validators.total_staked() == Some(self.ledger.total_staked()),
            MinedError::InvariantViolation,
        )?;

        // at most one pending session per owner
        let mut pending = std::collections::HashSet::new();
        for session in self.sessions.sessions().values() {
            if !session.completed {
                check_condition(pending.insert(session.owner), MinedError::InvariantViolation)?;
            }
        }

        Ok(())
    }

    // -- Events --

    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[Event] {
        &self.events
    }

    // -- Shared plumbing for operations --

    pub(crate) fn ensure_running(&self) -> Result<(), MinedError> {
        check_condition(!self.paused, MinedError::Paused)
    }

    pub(crate) fn ensure_admin(&self, caller: &Address) -> Result<(), MinedError> {
        check_condition(*caller == self.config.admin, MinedError::Unauthorized)
    }

    /// Applies a committed changeset and emits the supply events it implies.
    pub(crate) fn apply_ledger(&mut self, changes: Changeset) {
        let minted = changes.minted;
        let burned = changes.burned;
        let cumulative_emission = changes.cumulative_emission;
        let cumulative_burn = changes.cumulative_burn;

        self.ledger.apply(changes);

        if minted > 0 {
            self.events.push(Event::Emission {
                amount: minted,
                height: self.clock.height,
                cumulative_emission,
            });
        }
        if burned > 0 {
            self.events.push(Event::Burn {
                amount: burned,
                cumulative_burn,
            });
        }
    }

    // -- Persistence --

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            version: SNAPSHOT_VERSION,
            clock: self.clock,
            paused: self.paused,
            state: self.state(),
            balances: self.ledger.balances().clone(),
            sessions: self.sessions.sessions().clone(),
            results: self.sessions.results().clone(),
            discoveries: self.discoveries.discoveries().clone(),
            validators: self.validators.validators().clone(),
        }
    }

    /// Restores an engine from a snapshot and re-checks every invariant before handing it out.
    pub fn from_snapshot(
        config: TokenomicsConfig,
        snapshot: LedgerSnapshot,
    ) -> Result<Self, MinedError> {
        check_condition(
            snapshot.version == SNAPSHOT_VERSION,
            MinedError::UnsupportedSnapshot,
        )?;
        config.validate()?;

        let LedgerSnapshot {
            clock,
            paused,
            state,
            balances,
            sessions,
            results,
            discoveries,
            validators,
            ..
        } = snapshot;

        let balances: BTreeMap<Address, Amount> =
            balances.into_iter().filter(|(_, v)| *v > 0).collect();

        let engine = Self {
            hasher: Arc::new(Keccak256Hasher),
            clock,
            paused,
            ledger: Ledger::restore(&state, balances),
            sessions: MiningSessionRegistry::restore(
                sessions,
                results,
                state.next_session_id,
                state.next_result_id,
            )?,
            discoveries: DiscoveryRepository::restore(discoveries, state.next_discovery_id)?,
            validators: ValidatorStakingRegistry::restore(&config, validators)?,
            config,
            events: Vec::new(),
        };

        if let Err(err) = engine.check_invariants() {
            error!("snapshot at height {} failed invariant check", clock.height);
            return Err(err);
        }

        Ok(engine)
    }
}
