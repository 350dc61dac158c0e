use log::{debug, info};
use mined_api::prelude::*;

use crate::engine::MiningEngine;
use crate::tokenomics::{BurnModel, EmissionModel, RewardCalculator};

impl MiningEngine {
    /// Accepts a proof for a pending session, pays the reward (net of burn) and records the
    /// resulting discovery. Returns the new result id.
    pub fn submit_pow_result(
        &mut self,
        caller: Address,
        session_id: u64,
        nonce: u64,
        proof_value: ProofValue,
        complexity: u8,
        significance: u8,
    ) -> Result<u64, MinedError> {
        self.ensure_running()?;

        let session = self.sessions.check_submission(&caller, session_id)?.clone();
        check_complexity(complexity)?;
        check_significance(significance)?;

        if self.config.proof_mode == ProofMode::Recompute {
            let derived = self
                .hasher
                .derive(session_id, nonce, complexity, significance);
            if derived != proof_value {
                debug!("session {}: proof does not match nonce {}", session_id, nonce);
                return Err(MinedError::ProofMismatch);
            }
        }

        if proof_value > session.target {
            debug!(
                "session {}: proof {:#x} above target {:#x}",
                session_id, proof_value, session.target
            );
            return Err(MinedError::ProofBelowTarget);
        }

        let reward = RewardCalculator::new(&self.config).gross_reward(
            session.work_type,
            complexity,
            significance,
        )?;

        let burn_model = BurnModel::new(&self.config);
        let burn_rate = burn_model.burn_rate(significance, complexity, false)?;
        let burn = burn_model.burn_amount(reward.gross, burn_rate)?;

        let emission = EmissionModel::new(&self.config);
        let height = self.clock.height;

        let mut tx = self.ledger.begin();
        tx.add_research_value(reward.research_value)?;
        let paid = tx.disburse(
            PoolKind::MiningRewards,
            caller,
            reward.gross,
            burn,
            height,
            |elapsed, research_value| emission.decayed_emission(elapsed, research_value),
        )?;
        let changes = tx.commit()?;

        // Nothing below can fail.

        let discovery = self.discoveries.draft(
            caller,
            session.work_type,
            complexity,
            significance,
            reward.research_value,
            false,
            true,
            self.clock.unix_timestamp,
        );

        let result = PowResult {
            id: self.sessions.next_result_id(),
            session_id,
            proof_value,
            complexity,
            significance,
            valid: true,
            gross_reward: reward.gross,
            burned: paid.burned,
            net_reward: paid.net,
            discovery_id: discovery.id,
        };

        self.discoveries.insert(discovery.clone());
        let session = self
            .sessions
            .complete(session_id, nonce, self.clock.unix_timestamp, result.clone())
            .unwrap_or(session);
        self.apply_ledger(changes);

        info!(
            "session {} completed by {}: gross {} burned {} ({}%) net {}",
            session_id,
            caller,
            amount_to_ui(reward.gross),
            amount_to_ui(paid.burned),
            burn_rate,
            amount_to_ui(paid.net),
        );

        let result_id = result.id;
        self.events.push(Event::ResultSubmitted { session, result });
        self.events.push(Event::DiscoveryRecorded { discovery });

        Ok(result_id)
    }
}
