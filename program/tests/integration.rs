#![cfg(test)]
pub mod utils;
use utils::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use proptest::prelude::*;

use mined::tokenomics::{BurnModel, EmissionModel, RewardCalculator};
use mined::{process_instruction, MiningEngine};
use mined_api::prelude::*;

#[test]
fn scenario_a_target_boundary() {
    let mut engine = setup_engine();
    let who = miner(1);

    let session_id = engine.start_mining_session(who, 0, 1_000).unwrap();
    let target = engine.session(session_id).unwrap().target;
    assert_eq!(target, MAX_PROOF_VALUE / 1_000);

    let before = engine.snapshot();
    assert_eq!(
        engine.submit_pow_result(who, session_id, 1, target + 1, 50, 5),
        Err(MinedError::ProofBelowTarget)
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.session(session_id).unwrap().status(), SessionStatus::Pending);

    let result_id = engine
        .submit_pow_result(who, session_id, 2, target, 50, 5)
        .unwrap();
    let result = engine.result(result_id).unwrap();
    assert!(result.valid);
    assert_eq!(result.proof_value, target);
    assert_invariants(&engine);
}

#[test]
fn scenario_b_only_owner_may_submit() {
    let mut engine = setup_engine();
    let session_id = engine.start_mining_session(miner(1), 0, 25).unwrap();

    let before = engine.snapshot();
    assert_eq!(
        engine.submit_pow_result(miner(2), session_id, 0, 0, 10, 1),
        Err(MinedError::NotSessionOwner)
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn scenario_c_double_submission() {
    let mut engine = setup_engine();
    let who = miner(1);
    let session_id = engine.start_mining_session(who, 0, 25).unwrap();

    engine.submit_pow_result(who, session_id, 0, 0, 10, 1).unwrap();
    let before = engine.snapshot();
    assert_eq!(
        engine.submit_pow_result(who, session_id, 1, 0, 10, 1),
        Err(MinedError::SessionAlreadyCompleted)
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn scenario_d_burn_rate_ordering() {
    let config = TokenomicsConfig::default();
    let model = BurnModel::new(&config);

    let millennium = model.burn_rate(10, 100, true).unwrap();
    let standard = model.burn_rate(2, 100, false).unwrap();
    assert_eq!(millennium, config.max_burn_percent);
    assert!(millennium > standard);

    // The engine applies the same rate to mined rewards.
    let mut engine = setup_engine();
    let result = mine_once(&mut engine, miner(1), 0, 100, 10);
    let rate = model.burn_rate(10, 100, false).unwrap() as u128;
    assert_eq!(result.burned, result.gross_reward * rate / 100);
    assert_eq!(result.net_reward, result.gross_reward - result.burned);
    assert_eq!(engine.balance_of(&miner(1)), result.net_reward);
    assert_eq!(engine.total_burned(), result.burned);
    assert_invariants(&engine);
}

#[test]
fn scenario_e_unstake_over_stake() {
    let mut engine = setup_engine();
    let validator = genesis_validator(1);

    let before = engine.snapshot();
    assert_eq!(
        engine.unstake(validator, GENESIS_VALIDATOR_STAKE + 1),
        Err(MinedError::InsufficientStake)
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn session_lifecycle_and_reward() {
    let mut engine = setup_engine();
    let who = miner(1);
    let pool_before = engine.pools().mining_rewards;

    assert_eq!(engine.start_mining_session(who, 25, 10), Err(MinedError::InvalidWorkType));
    assert_eq!(engine.start_mining_session(who, 0, 0), Err(MinedError::InvalidDifficulty));
    assert_eq!(engine.start_mining_session(who, 0, 1_001), Err(MinedError::InvalidDifficulty));

    let session_id = engine.start_mining_session(who, 3, 10).unwrap();
    assert_eq!(engine.start_mining_session(who, 4, 10), Err(MinedError::ActiveSessionExists));
    assert_eq!(engine.active_session_of(&who).unwrap().id, session_id);

    // A different owner may have a session pending at the same time.
    engine.start_mining_session(miner(2), 3, 10).unwrap();

    tick(&mut engine, 3);
    assert_eq!(
        engine.submit_pow_result(who, session_id, 0, 0, 0, 5),
        Err(MinedError::InvalidComplexity)
    );
    assert_eq!(
        engine.submit_pow_result(who, session_id, 0, 0, 50, 11),
        Err(MinedError::InvalidSignificance)
    );

    let result_id = engine.submit_pow_result(who, session_id, 9, 0, 50, 5).unwrap();
    let result = engine.result(result_id).cloned().unwrap();
    let expected = RewardCalculator::new(engine.config())
        .gross_reward(3, 50, 5)
        .unwrap();
    assert_eq!(result.gross_reward, expected.gross);

    let session = engine.session(session_id).unwrap();
    assert!(session.completed);
    assert_eq!(session.nonce, Some(9));
    assert_eq!(session.end_time, Some(engine.clock().unix_timestamp));
    assert!(engine.active_session_of(&who).is_none());

    let discovery = engine.discovery(result.discovery_id).unwrap();
    assert!(discovery.is_from_pow);
    assert!(!discovery.is_collaborative);
    assert_eq!(discovery.researcher, who);
    assert_eq!(discovery.research_value, 25_000);
    assert_eq!(engine.total_research_value(), 25_000);

    assert_eq!(engine.pools().mining_rewards, pool_before - result.gross_reward);
    assert_eq!(engine.state().next_result_id, 2);
    assert_eq!(engine.state().next_discovery_id, 2);

    let events = engine.drain_events();
    assert!(matches!(events[0], Event::SessionStarted { .. }));
    assert!(events.iter().any(|e| matches!(e, Event::Burn { .. })));
    assert!(events.iter().any(|e| matches!(e, Event::ResultSubmitted { .. })));
    assert!(events.iter().any(|e| matches!(e, Event::DiscoveryRecorded { .. })));
    assert!(!events.iter().any(|e| matches!(e, Event::Emission { .. })));
    assert!(engine.drain_events().is_empty());

    assert_invariants(&engine);
}

#[test]
fn pool_exhaustion_mints_instead_of_failing() {
    let config = TokenomicsConfig {
        mining_pool_bps: 0,
        ..TokenomicsConfig::default()
    };
    let mut engine = setup_engine_with(config.clone());
    let who = miner(1);

    tick(&mut engine, 100);
    let result = mine_once(&mut engine, who, 0, 50, 5);

    let refill = EmissionModel::new(&config)
        .decayed_emission(100, 25_000)
        .unwrap();
    let state = engine.state();
    assert_eq!(state.cumulative_emission, result.gross_reward + refill);
    assert_eq!(state.last_emission_block, 100);
    assert_eq!(engine.pools().mining_rewards, refill);
    assert_eq!(engine.balance_of(&who), result.net_reward);
    assert_eq!(
        engine.total_supply(),
        INITIAL_SUPPLY + result.gross_reward + refill - result.burned
    );
    assert!(engine
        .drain_events()
        .iter()
        .any(|e| matches!(e, Event::Emission { height: 100, .. })));
    assert_invariants(&engine);

    // Keep mining well past the refill; every payment still goes through.
    for round in 0..20 {
        tick(&mut engine, 7);
        mine_once(&mut engine, miner(2 + round % 3), (round % 25) as u8, 100, 10);
        assert_invariants(&engine);
    }
    assert!(engine.state().last_emission_block > 100);
}

#[test]
fn empty_pool_mints_in_the_genesis_block() {
    let config = TokenomicsConfig {
        mining_pool_bps: 0,
        ..TokenomicsConfig::default()
    };
    let mut engine = setup_engine_with(config.clone());
    let who = miner(1);

    // No blocks have passed since genesis, so the refill is undecayed.
    let result = mine_once(&mut engine, who, 0, 50, 5);
    let refill = EmissionModel::new(&config).decayed_emission(0, 25_000).unwrap();
    assert_eq!(refill, INITIAL_EMISSION * 125 / 100);

    let state = engine.state();
    assert_eq!(state.cumulative_emission, result.gross_reward + refill);
    assert_eq!(state.last_emission_block, 0);
    assert_eq!(engine.pools().mining_rewards, refill);
    assert_eq!(engine.balance_of(&who), result.net_reward);
    assert_invariants(&engine);

    // Same block again, now paid out of the refill.
    mine_once(&mut engine, miner(2), 0, 50, 5);
    assert_eq!(engine.state().cumulative_emission, state.cumulative_emission);
    assert_invariants(&engine);

    // Draining the refill in the same block mints again without decay.
    for n in 3..=5 {
        mine_once(&mut engine, miner(n), 0, 50, 5);
        assert_invariants(&engine);
    }
    assert!(engine.state().cumulative_emission > state.cumulative_emission);
    assert_eq!(engine.state().last_emission_block, 0);
}

#[test]
fn direct_research_value_is_capped() {
    let mut engine = setup_engine();
    let griefer = miner(9);
    let cap = engine.config().max_research_value;

    assert_eq!(
        engine.submit_discovery(griefer, 0, 1, 1, u128::MAX, false),
        Err(MinedError::InvalidAmount)
    );
    assert_eq!(
        engine.submit_discovery(griefer, 0, 1, 1, cap + 1, false),
        Err(MinedError::InvalidAmount)
    );
    assert_eq!(engine.total_research_value(), 0);

    engine.submit_discovery(griefer, 0, 1, 1, cap, false).unwrap();
    assert_eq!(engine.total_research_value(), cap);

    // Mining keeps working after the largest allowed submission.
    let result = mine_once(&mut engine, miner(1), 0, 50, 5);
    assert!(result.net_reward > 0);
    assert_eq!(engine.total_research_value(), cap + 25_000);
    assert_invariants(&engine);
}

#[test]
fn discovery_validation_reaches_quorum() {
    let mut engine = setup_engine();
    let result = mine_once(&mut engine, miner(1), 2, 40, 8);
    let id = result.discovery_id;
    let pool_before = engine.pools().validator_reward;

    assert_eq!(
        engine.validate_discovery(miner(9), id),
        Err(MinedError::ValidatorNotFound)
    );
    assert_eq!(
        engine.validate_discovery(genesis_validator(1), 999),
        Err(MinedError::DiscoveryNotFound)
    );

    assert_eq!(engine.validate_discovery(genesis_validator(1), id), Ok(1));
    assert_eq!(
        engine.validate_discovery(genesis_validator(1), id),
        Err(MinedError::AlreadyValidated)
    );
    assert!(!engine.discovery(id).unwrap().is_validated);

    assert_eq!(engine.validate_discovery(genesis_validator(2), id), Ok(2));
    assert_eq!(engine.validate_discovery(genesis_validator(3), id), Ok(3));
    assert!(engine.discovery(id).unwrap().is_validated);

    // Past quorum further votes are a no-op.
    let before = engine.snapshot();
    assert_eq!(engine.validate_discovery(genesis_validator(4), id), Ok(3));
    assert_eq!(engine.snapshot(), before);

    let v1 = engine.validator(&genesis_validator(1)).unwrap();
    assert_eq!(v1.total_validations, 1);
    assert_eq!(v1.reputation, INITIAL_REPUTATION + 1);
    assert_eq!(engine.balance_of(&genesis_validator(1)), VALIDATION_REWARD);
    assert_eq!(engine.pools().validator_reward, pool_before - 3 * VALIDATION_REWARD);
    assert_invariants(&engine);
}

#[test]
fn direct_discovery_is_recorded_without_reward() {
    let mut engine = setup_engine();
    let who = miner(1);
    let supply = engine.total_supply();

    assert_eq!(
        engine.submit_discovery(who, 1, 8, 3, 0, false),
        Err(MinedError::InvalidAmount)
    );
    assert_eq!(
        engine.submit_discovery(who, 25, 8, 3, 750, false),
        Err(MinedError::InvalidWorkType)
    );
    assert_eq!(
        engine.submit_discovery(who, 1, 0, 3, 750, false),
        Err(MinedError::InvalidComplexity)
    );

    let id = engine.submit_discovery(who, 1, 8, 3, 750, true).unwrap();
    let discovery = engine.discovery(id).unwrap();
    assert!(!discovery.is_from_pow);
    assert!(discovery.is_collaborative);
    assert_eq!(engine.total_research_value(), 750);
    assert_eq!(engine.balance_of(&who), 0);
    assert_eq!(engine.total_supply(), supply);
    assert_invariants(&engine);
}

#[test]
fn staking_lifecycle() {
    let mut engine = setup_engine();
    let who = miner(1);

    assert_eq!(engine.stake(who, MIN_VALIDATOR_STAKE), Err(MinedError::InsufficientBalance));
    assert_eq!(engine.stake(who, 0), Err(MinedError::InvalidAmount));

    fund(&mut engine, who, 2 * MIN_VALIDATOR_STAKE);
    let staked_before = engine.total_staked();

    assert_eq!(engine.stake(who, MIN_VALIDATOR_STAKE / 2), Ok(MIN_VALIDATOR_STAKE / 2));
    assert!(!engine.validator(&who).unwrap().is_active);
    assert_eq!(engine.stake(who, MIN_VALIDATOR_STAKE / 2), Ok(MIN_VALIDATOR_STAKE));
    assert!(engine.validator(&who).unwrap().is_active);
    assert_eq!(engine.total_staked(), staked_before + MIN_VALIDATOR_STAKE);
    assert_eq!(engine.state().total_validators, GENESIS_VALIDATOR_COUNT as u64 + 1);
    assert_eq!(engine.active_validators().len(), GENESIS_VALIDATOR_COUNT as usize + 1);

    // A freshly staked validator can vote.
    let result = mine_once(&mut engine, miner(2), 0, 10, 1);
    assert_eq!(engine.validate_discovery(who, result.discovery_id), Ok(1));

    assert_eq!(engine.unstake(who, 1), Ok(MIN_VALIDATOR_STAKE - 1));
    assert!(!engine.validator(&who).unwrap().is_active);
    assert_eq!(
        engine.validate_discovery(who, result.discovery_id),
        Err(MinedError::ValidatorInactive)
    );

    assert_eq!(engine.unstake(who, MIN_VALIDATOR_STAKE - 1), Ok(0));
    assert_eq!(
        engine.balance_of(&who),
        2 * MIN_VALIDATOR_STAKE + VALIDATION_REWARD
    );
    assert_eq!(engine.total_staked(), staked_before);
    assert_invariants(&engine);
}

#[test]
fn transfers_require_balance() {
    let mut engine = setup_engine();
    let before = engine.snapshot();
    assert_eq!(
        engine.transfer(miner(1), miner(2), 1),
        Err(MinedError::InsufficientBalance)
    );
    assert_eq!(engine.transfer(miner(1), miner(2), 0), Err(MinedError::InvalidAmount));
    assert_eq!(engine.snapshot(), before);

    fund(&mut engine, miner(1), 10 * ONE_MINED);
    engine.transfer(miner(1), miner(2), 4 * ONE_MINED).unwrap();
    assert_eq!(engine.balance_of(&miner(1)), 6 * ONE_MINED);
    assert_eq!(engine.balance_of(&miner(2)), 4 * ONE_MINED);
    assert_invariants(&engine);
}

#[test]
fn pause_blocks_mutations() {
    let mut engine = setup_engine();
    let admin = admin(&engine);

    assert_eq!(engine.pause(miner(1)), Err(MinedError::Unauthorized));
    engine.pause(admin).unwrap();
    assert!(engine.is_paused());
    assert_eq!(engine.pause(admin), Err(MinedError::Paused));

    assert_eq!(engine.start_mining_session(miner(1), 0, 10), Err(MinedError::Paused));
    assert_eq!(engine.stake(genesis_validator(1), 1), Err(MinedError::Paused));
    assert_eq!(engine.transfer(admin, miner(1), 1), Err(MinedError::Paused));
    assert_eq!(
        engine.submit_discovery(miner(1), 0, 1, 1, 1, false),
        Err(MinedError::Paused)
    );

    // The clock keeps running while paused.
    tick(&mut engine, 5);
    assert_eq!(engine.clock().height, 5);

    assert_eq!(engine.unpause(miner(1)), Err(MinedError::Unauthorized));
    engine.unpause(admin).unwrap();
    assert!(engine.start_mining_session(miner(1), 0, 10).is_ok());

    let events = engine.drain_events();
    assert!(events.contains(&Event::Paused));
    assert!(events.contains(&Event::Unpaused));
}

#[test]
fn admin_toggles_validators() {
    let mut engine = setup_engine();
    let admin = admin(&engine);
    let v = genesis_validator(2);

    assert_eq!(
        engine.set_validator_active(miner(1), v, false),
        Err(MinedError::Unauthorized)
    );
    engine.set_validator_active(admin, v, false).unwrap();
    assert!(!engine.validator(&v).unwrap().is_active);
    engine.set_validator_active(admin, v, true).unwrap();
    assert!(engine.validator(&v).unwrap().is_active);
}

#[test]
fn clock_cannot_regress() {
    let mut engine = setup_engine();
    tick(&mut engine, 10);
    let now = engine.clock();
    assert_eq!(
        engine.advance_clock(Clock::new(now.height - 1, now.unix_timestamp)),
        Err(MinedError::ClockRegression)
    );
    assert_eq!(
        engine.advance_clock(Clock::new(now.height, now.unix_timestamp - 1)),
        Err(MinedError::ClockRegression)
    );
    assert_eq!(engine.clock(), now);
}

#[test]
fn snapshot_restores_identically() {
    let mut engine = setup_engine();
    let result = mine_once(&mut engine, miner(1), 0, 60, 9);
    engine.validate_discovery(genesis_validator(1), result.discovery_id).unwrap();
    let pending = engine.start_mining_session(miner(2), 4, 50).unwrap();
    fund(&mut engine, miner(3), 5_000 * ONE_MINED);
    engine.stake(miner(3), 1_500 * ONE_MINED).unwrap();

    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: LedgerSnapshot = serde_json::from_str(&json).unwrap();

    let mut restored = MiningEngine::from_snapshot(engine.config().clone(), decoded).unwrap();
    assert_eq!(restored.snapshot(), snapshot);
    assert_invariants(&restored);

    // The pending-session index was rebuilt.
    assert_eq!(
        restored.start_mining_session(miner(2), 0, 1),
        Err(MinedError::ActiveSessionExists)
    );
    assert!(restored
        .submit_pow_result(miner(2), pending, 0, 0, 10, 2)
        .is_ok());
}

#[test]
fn dispatcher_routes_every_instruction() {
    let mut engine = setup_engine();
    let admin = admin(&engine);
    let who = miner(1);

    let outcome = process_instruction(
        &mut engine,
        who,
        Instruction::StartMiningSession { work_type: 0, difficulty: 10 },
    )
    .unwrap();
    let Outcome::SessionStarted { session_id } = outcome else {
        panic!("unexpected outcome {:?}", outcome);
    };

    let outcome = process_instruction(
        &mut engine,
        who,
        Instruction::SubmitPowResult {
            session_id,
            nonce: 1,
            proof_value: 0,
            complexity: 30,
            significance: 4,
        },
    )
    .unwrap();
    assert_eq!(outcome, Outcome::ResultSubmitted { result_id: 1 });

    let outcome = process_instruction(
        &mut engine,
        who,
        Instruction::SubmitDiscovery {
            work_type: 1,
            complexity: 8,
            significance: 3,
            research_value: 750,
            is_collaborative: false,
        },
    )
    .unwrap();
    assert_eq!(outcome, Outcome::DiscoveryRecorded { discovery_id: 2 });

    let outcome = process_instruction(
        &mut engine,
        genesis_validator(1),
        Instruction::ValidateDiscovery { discovery_id: 2 },
    )
    .unwrap();
    assert_eq!(outcome, Outcome::DiscoveryValidated { validation_count: 1 });

    let outcome = process_instruction(
        &mut engine,
        admin,
        Instruction::Transfer { to: who, amount: MIN_VALIDATOR_STAKE },
    )
    .unwrap();
    assert_eq!(outcome, Outcome::Transferred);

    let staked = engine.balance_of(&who);
    let outcome = process_instruction(&mut engine, who, Instruction::Stake { amount: staked }).unwrap();
    assert_eq!(outcome, Outcome::StakeUpdated { staked_amount: staked });

    let outcome = process_instruction(&mut engine, who, Instruction::Unstake { amount: 1 }).unwrap();
    assert_eq!(outcome, Outcome::StakeUpdated { staked_amount: staked - 1 });

    assert_eq!(
        process_instruction(
            &mut engine,
            admin,
            Instruction::SetValidatorActive { validator: genesis_validator(5), active: false },
        ),
        Ok(Outcome::Done)
    );
    assert_eq!(process_instruction(&mut engine, who, Instruction::Pause), Err(MinedError::Unauthorized));
    assert_eq!(process_instruction(&mut engine, admin, Instruction::Pause), Ok(Outcome::Done));
    assert_eq!(process_instruction(&mut engine, admin, Instruction::Unpause), Ok(Outcome::Done));

    assert_invariants(&engine);
}

#[test]
fn recompute_mode_checks_the_proof() {
    let config = TokenomicsConfig {
        proof_mode: ProofMode::Recompute,
        ..TokenomicsConfig::default()
    };
    let mut engine = setup_engine_with(config);
    let who = miner(1);
    let hasher = engine.hasher();

    let session_id = engine.start_mining_session(who, 0, 4).unwrap();
    let target = engine.session(session_id).unwrap().target;
    let (nonce, proof) = solve(hasher.as_ref(), session_id, target, 20, 2);

    assert_eq!(
        engine.submit_pow_result(who, session_id, nonce, proof ^ 1, 20, 2),
        Err(MinedError::ProofMismatch)
    );
    assert_eq!(
        engine.submit_pow_result(who, session_id, nonce, proof, 21, 2),
        Err(MinedError::ProofMismatch)
    );
    assert!(engine
        .submit_pow_result(who, session_id, nonce, proof, 20, 2)
        .is_ok());
}

#[test]
fn random_interleavings_preserve_invariants() {
    let config = TokenomicsConfig {
        // Start with an empty mining pool so rewards go through emission from the first payout.
        mining_pool_bps: 0,
        ..TokenomicsConfig::default()
    };
    let mut engine = setup_engine_with(config);
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let admin = admin(&engine);

    let actors: Vec<Address> = (1..=6).map(miner).chain((1..=5).map(genesis_validator)).collect();
    for who in actors.iter().take(6) {
        fund(&mut engine, *who, 5_000 * ONE_MINED);
    }

    let mut successes = 0;
    for _ in 0..2_000 {
        let who = actors[rng.gen_range(0..actors.len())];
        let before = engine.snapshot();

        let result = match rng.gen_range(0..9) {
            0 | 1 => engine
                .start_mining_session(who, rng.gen_range(0..=26), rng.gen_range(0..=1_001))
                .map(|_| ()),
            2 | 3 => {
                let next = engine.state().next_session_id;
                let session_id = match engine.active_session_of(&who) {
                    Some(session) if rng.gen_bool(0.7) => session.id,
                    _ => rng.gen_range(1..=next),
                };
                let proof = if rng.gen_bool(0.8) { 0 } else { rng.gen() };
                engine
                    .submit_pow_result(
                        who,
                        session_id,
                        rng.gen(),
                        proof,
                        rng.gen_range(0..=101),
                        rng.gen_range(0..=11),
                    )
                    .map(|_| ())
            }
            4 => engine
                .stake(who, rng.gen_range(0..=1_500) * ONE_MINED)
                .map(|_| ()),
            5 => engine
                .unstake(who, rng.gen_range(0..=1_500) * ONE_MINED)
                .map(|_| ()),
            6 => {
                let next = engine.state().next_discovery_id;
                engine
                    .validate_discovery(who, rng.gen_range(1..=next))
                    .map(|_| ())
            }
            7 => {
                let to = actors[rng.gen_range(0..actors.len())];
                engine
                    .transfer(who, to, rng.gen_range(0..=100) * ONE_MINED)
                    .map(|_| ())
            }
            _ => {
                tick(&mut engine, rng.gen_range(1..=50));
                Ok(())
            }
        };

        match result {
            Ok(()) => successes += 1,
            Err(err) => {
                assert!(!err.is_fatal(), "fatal error {:?}", err);
                assert_eq!(engine.snapshot(), before, "failed op mutated state: {:?}", err);
            }
        }
        assert_invariants(&engine);
    }

    assert!(successes > 200);
    assert!(engine.state().cumulative_emission > 0);
    assert!(engine.total_burned() > 0);
    engine.pause(admin).unwrap();
    assert_invariants(&engine);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn supply_is_conserved_across_mining(
        rounds in prop::collection::vec((0u8..=24, 1u8..=100, 1u8..=10, 0u64..500), 1..20),
        mining_pool_bps in 0u16..=2,
    ) {
        let config = TokenomicsConfig { mining_pool_bps, ..TokenomicsConfig::default() };
        let mut engine = setup_engine_with(config);
        let mut paid: Amount = 0;
        let mut burned: Amount = 0;

        for (i, (work_type, complexity, significance, gap)) in rounds.into_iter().enumerate() {
            tick(&mut engine, gap);
            let result = mine_once(&mut engine, miner(i as u64 % 4), work_type, complexity, significance);
            paid += result.net_reward;
            burned += result.burned;
            prop_assert!(engine.check_invariants().is_ok());
        }

        let state = engine.state();
        prop_assert_eq!(state.total_burned, burned);
        prop_assert_eq!(
            state.total_supply,
            INITIAL_SUPPLY + state.cumulative_emission - state.cumulative_burn
        );
        let miners: Amount = (0..4).map(|n| engine.balance_of(&miner(n))).sum();
        prop_assert_eq!(miners, paid);
    }
}
