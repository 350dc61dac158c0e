use mined::MiningEngine;
use mined_api::prelude::*;

pub fn setup_engine() -> MiningEngine {
    setup_engine_with(TokenomicsConfig::default())
}

pub fn setup_engine_with(config: TokenomicsConfig) -> MiningEngine {
    let mut engine = MiningEngine::with_clock(config, Clock::new(0, 1_700_000_000))
        .expect("genesis");
    engine.drain_events();
    engine
}

pub fn admin(engine: &MiningEngine) -> Address {
    engine.admin()
}

pub fn miner(n: u64) -> Address {
    Address::from_low_u64(0x1000 + n)
}

pub fn genesis_validator(n: u64) -> Address {
    Address::from_low_u64(n)
}

/// Sends `amount` from the admin's genesis balance to `to`.
pub fn fund(engine: &mut MiningEngine, to: Address, amount: Amount) {
    let from = engine.admin();
    engine.transfer(from, to, amount).expect("fund");
}

/// Advances the clock by `blocks` blocks of 12 seconds.
pub fn tick(engine: &mut MiningEngine, blocks: u64) {
    let now = engine.clock();
    engine
        .advance_clock(Clock::new(now.height + blocks, now.unix_timestamp + 12 * blocks as i64))
        .expect("clock");
}

/// Scans nonces until the derived proof meets `target`.
pub fn solve(
    hasher: &dyn ProofHasher,
    session_id: u64,
    target: ProofValue,
    complexity: u8,
    significance: u8,
) -> (u64, ProofValue) {
    let mut nonce: u64 = 0;
    loop {
        let proof = hasher.derive(session_id, nonce, complexity, significance);
        if proof <= target {
            return (nonce, proof);
        }
        nonce += 1;
    }
}

/// Starts a session and submits a trivially valid proof for it.
pub fn mine_once(
    engine: &mut MiningEngine,
    who: Address,
    work_type: u8,
    complexity: u8,
    significance: u8,
) -> PowResult {
    let session_id = engine
        .start_mining_session(who, work_type, 1)
        .expect("start");
    let result_id = engine
        .submit_pow_result(who, session_id, 0, 0, complexity, significance)
        .expect("submit");
    engine.result(result_id).cloned().expect("result")
}

/// Checks the engine's own invariants and recomputes conservation from a snapshot.
pub fn assert_invariants(engine: &MiningEngine) {
    engine.check_invariants().expect("invariants");

    let snapshot = engine.snapshot();
    let pools = snapshot.state.pools.total().expect("pools");
    let circulating: Amount = snapshot.balances.values().sum();
    assert_eq!(pools + circulating, snapshot.state.total_supply);
    assert_eq!(
        snapshot.state.total_supply,
        snapshot.state.initial_supply + snapshot.state.cumulative_emission
            - snapshot.state.cumulative_burn
    );

    let staked: Amount = snapshot.validators.values().map(|v| v.staked_amount).sum();
    assert_eq!(staked, snapshot.state.total_staked);
    assert!(snapshot.state.pools.staking >= staked);
}
