use std::collections::{BTreeMap, HashMap};

use mined_api::prelude::*;

/// Sessions, their results, and the per-owner index of pending sessions.
#[derive(Clone, Debug)]
pub struct MiningSessionRegistry {
    sessions: BTreeMap<u64, MiningSession>,
    results: BTreeMap<u64, PowResult>,
    active_by_owner: HashMap<Address, u64>,
    next_session_id: u64,
    next_result_id: u64,
}

impl Default for MiningSessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MiningSessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: BTreeMap::new(),
            results: BTreeMap::new(),
            active_by_owner: HashMap::new(),
            next_session_id: 1,
            next_result_id: 1,
        }
    }

    /// Rebuilds the registry from persisted tables. Fails if an owner has two pending sessions
    /// or an id is at or past its counter.
    pub fn restore(
        sessions: BTreeMap<u64, MiningSession>,
        results: BTreeMap<u64, PowResult>,
        next_session_id: u64,
        next_result_id: u64,
    ) -> Result<Self, MinedError> {
        let mut active_by_owner = HashMap::new();

        for (id, session) in sessions.iter() {
            check_condition(
                *id == session.id && *id < next_session_id,
                MinedError::InvariantViolation,
            )?;
            if !session.completed {
                check_condition(
                    active_by_owner.insert(session.owner, *id).is_none(),
                    MinedError::InvariantViolation,
                )?;
            }
        }

        for (id, result) in results.iter() {
            check_condition(
                *id == result.id
                    && *id < next_result_id
                    && sessions.get(&result.session_id).is_some_and(|s| s.completed),
                MinedError::InvariantViolation,
            )?;
        }

        Ok(Self {
            sessions,
            results,
            active_by_owner,
            next_session_id,
            next_result_id,
        })
    }

    pub fn session(&self, id: u64) -> Option<&MiningSession> {
        self.sessions.get(&id)
    }

    pub fn result(&self, id: u64) -> Option<&PowResult> {
        self.results.get(&id)
    }

    pub fn sessions(&self) -> &BTreeMap<u64, MiningSession> {
        &self.sessions
    }

    pub fn results(&self) -> &BTreeMap<u64, PowResult> {
        &self.results
    }

    pub fn active_session_of(&self, owner: &Address) -> Option<&MiningSession> {
        self.active_by_owner
            .get(owner)
            .and_then(|id| self.sessions.get(id))
    }

    pub fn pending_count(&self) -> usize {
        self.active_by_owner.len()
    }

    pub fn next_session_id(&self) -> u64 {
        self.next_session_id
    }

    pub fn next_result_id(&self) -> u64 {
        self.next_result_id
    }

    /// Builds the session a start request would create, without recording it.
    pub fn prepare_start(
        &self,
        owner: Address,
        work_type: u8,
        difficulty: u16,
        clock: &Clock,
    ) -> Result<MiningSession, MinedError> {
        let target = compute_target(difficulty)?;

        check_condition(
            !self.active_by_owner.contains_key(&owner),
            MinedError::ActiveSessionExists,
        )?;

        Ok(MiningSession {
            id: self.next_session_id,
            owner,
            work_type,
            difficulty,
            target,
            start_time: clock.unix_timestamp,
            start_height: clock.height,
            end_time: None,
            nonce: None,
            completed: false,
        })
    }

    /// Records a session produced by [`Self::prepare_start`].
    pub fn insert(&mut self, session: MiningSession) {
        self.active_by_owner.insert(session.owner, session.id);
        self.next_session_id = self.next_session_id.max(session.id + 1);
        self.sessions.insert(session.id, session);
    }

    /// Checks that `caller` may submit a result for `session_id`.
    pub fn check_submission(
        &self,
        caller: &Address,
        session_id: u64,
    ) -> Result<&MiningSession, MinedError> {
        let session = self
            .sessions
            .get(&session_id)
            .ok_or(MinedError::SessionNotFound)?;

        check_condition(session.owner == *caller, MinedError::NotSessionOwner)?;
        check_condition(!session.completed, MinedError::SessionAlreadyCompleted)?;

        Ok(session)
    }

    /// Completes a pending session and stores its result. Returns the completed session.
    pub fn complete(
        &mut self,
        session_id: u64,
        nonce: u64,
        end_time: i64,
        result: PowResult,
    ) -> Option<MiningSession> {
        let session = self.sessions.get_mut(&session_id)?;
        session.completed = true;
        session.end_time = Some(end_time);
        session.nonce = Some(nonce);

        let session = session.clone();
        self.active_by_owner.remove(&session.owner);
        self.next_result_id = self.next_result_id.max(result.id + 1);
        self.results.insert(result.id, result);

        Some(session)
    }
}
