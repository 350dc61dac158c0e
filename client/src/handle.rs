use std::sync::Arc;

use log::debug;
use mined::{process_instruction, MiningEngine};
use mined_api::prelude::*;
use tokio::sync::{broadcast, RwLock};

const EVENT_CAPACITY: usize = 1024;

/// Shared access to one engine. Mutations hold the write lock for their whole duration, reads
/// take the read lock and return owned copies, so no reader ever sees a half-applied operation.
#[derive(Clone)]
pub struct EngineHandle {
    engine: Arc<RwLock<MiningEngine>>,
    events: broadcast::Sender<Event>,
}

impl EngineHandle {
    pub fn new(engine: MiningEngine) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            engine: Arc::new(RwLock::new(engine)),
            events,
        }
    }

    /// Receives every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    pub async fn execute(&self, signer: Address, ix: Instruction) -> Result<Outcome, MinedError> {
        let mut engine = self.engine.write().await;
        let outcome = process_instruction(&mut engine, signer, ix);
        self.publish(&mut engine);
        outcome
    }

    pub async fn advance_clock(&self, clock: Clock) -> Result<(), MinedError> {
        self.engine.write().await.advance_clock(clock)
    }

    /// Runs `f` under the read lock.
    pub async fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&MiningEngine) -> T,
    {
        let engine = self.engine.read().await;
        f(&engine)
    }

    pub async fn clock(&self) -> Clock {
        self.read(|e| e.clock()).await
    }

    pub async fn hasher(&self) -> Arc<dyn ProofHasher> {
        self.read(|e| e.hasher()).await
    }

    pub async fn session(&self, id: u64) -> Option<MiningSession> {
        self.read(|e| e.session(id).cloned()).await
    }

    pub async fn active_session_of(&self, owner: Address) -> Option<MiningSession> {
        self.read(|e| e.active_session_of(&owner).cloned()).await
    }

    pub async fn result(&self, id: u64) -> Option<PowResult> {
        self.read(|e| e.result(id).cloned()).await
    }

    pub async fn discovery(&self, id: u64) -> Option<Discovery> {
        self.read(|e| e.discovery(id).cloned()).await
    }

    pub async fn validator(&self, address: Address) -> Option<ValidatorRecord> {
        self.read(|e| e.validator(&address).cloned()).await
    }

    pub async fn balance_of(&self, address: Address) -> Amount {
        self.read(|e| e.balance_of(&address)).await
    }

    pub async fn state(&self) -> GlobalState {
        self.read(|e| e.state()).await
    }

    pub async fn snapshot(&self) -> LedgerSnapshot {
        self.read(|e| e.snapshot()).await
    }

    pub async fn check_invariants(&self) -> Result<(), MinedError> {
        self.read(|e| e.check_invariants()).await
    }

    fn publish(&self, engine: &mut MiningEngine) {
        for event in engine.drain_events() {
            // No subscribers is fine; events are advisory.
            if self.events.send(event).is_err() {
                debug!("event dropped, no subscribers");
            }
        }
    }
}
