use crate::types::Amount;

pub const METADATA_NAME: &str              = "MINED";
pub const METADATA_SYMBOL: &str            = "MINED";

pub const TOKEN_DECIMALS: u8               = 18;
pub const ONE_MINED: Amount                = 10u128.pow(TOKEN_DECIMALS as u32);
pub const INITIAL_SUPPLY: Amount           = 1_000_000_000 * ONE_MINED;

// Basis points of the initial supply allocated to each pool at genesis. Whatever is left over
// (3,500 bps) is credited to the admin account as circulating supply.
pub const BPS_DENOMINATOR: u128            = 10_000;
pub const MINING_POOL_BPS: u16             = 1_000;
pub const STAKING_POOL_BPS: u16            = 2_000;
pub const GOVERNANCE_POOL_BPS: u16         = 500;
pub const RESEARCH_ACCESS_POOL_BPS: u16    = 1_000;
pub const TRANSACTION_FEE_POOL_BPS: u16    = 500;
pub const TREASURY_POOL_BPS: u16           = 1_000;
pub const VALIDATOR_REWARD_POOL_BPS: u16   = 500;

// -- Puzzle bounds --

pub const MAX_PROOF_VALUE: u128            = u128::MAX;
pub const MIN_DIFFICULTY: u16              = 1;
pub const MAX_DIFFICULTY: u16              = 1_000;

pub const MAX_WORK_TYPE: u8                = 24;
pub const WORK_TYPE_COUNT: usize           = MAX_WORK_TYPE as usize + 1;

pub const MIN_COMPLEXITY: u8               = 1;
pub const MAX_COMPLEXITY: u8               = 100;
pub const MIN_SIGNIFICANCE: u8             = 1;
pub const MAX_SIGNIFICANCE: u8             = 10;

// -- Reward --

pub const REWARD_SCALE: u128               = 10_000;
pub const RESEARCH_SCALE: u128             = 100;
pub const MAX_RESEARCH_VALUE: u128         = MAX_COMPLEXITY as u128 * MAX_SIGNIFICANCE as u128 * RESEARCH_SCALE;
pub const BASE_REWARD_UNIT: Amount         = ONE_MINED / 10_000;
pub const BASE_REWARD_MAX: u128            = 1_000;
pub const BASE_REWARD_STEP: u128           = 25;

// -- Burn --

pub const MAX_BURN_PERCENT: u8             = 50;
pub const COLLABORATIVE_BURN_BONUS: u8     = 10;
pub const COMPLEXITY_BURN_DIVISOR: u8      = 20;

// -- Emission --

pub const WAD: u128                        = 1_000_000_000_000_000_000;
pub const PPM_DENOMINATOR: u128            = 1_000_000;
pub const INITIAL_EMISSION: Amount         = 1_000 * ONE_MINED;  // E0, per on-demand mint
pub const DECAY_PER_BLOCK_PPM: u32         = 100;                // λ = 0.0001
pub const RESEARCH_ALPHA_PPM: u32          = 2_500;              // α = 0.0025
pub const MAX_RESEARCH_BONUS_BPS: u16      = 2_500;              // multiplier capped at 1.25
pub const MIN_DECAY_WAD: u128              = 1_000_000_000;      // decay never drops below 1e-9

// -- Validators --

pub const MIN_VALIDATOR_STAKE: Amount      = 1_000 * ONE_MINED;
pub const GENESIS_VALIDATOR_COUNT: u8      = 5;
pub const GENESIS_VALIDATOR_STAKE: Amount  = 1_000 * ONE_MINED;
pub const INITIAL_REPUTATION: u8           = 100;
pub const MAX_REPUTATION: u8               = u8::MAX;
pub const VALIDATION_QUORUM: u32           = 3;
pub const VALIDATION_REWARD: Amount        = 100 * ONE_MINED;

// -- Snapshot --

pub const SNAPSHOT_VERSION: u16            = 1;
