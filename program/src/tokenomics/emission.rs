use mined_api::prelude::*;

/// Helper: fixed-point multiply of two WAD values, rounding down.
#[inline(always)]
fn wad_mul(a: u128, b: u128) -> u128 {
    // Both operands are at most WAD, so the product fits in a u128.
    a * b / WAD
}

/// On-demand issuance: E0 × (1 − λ)^elapsed × (1 + min(α·rv, cap)).
pub struct EmissionModel<'a> {
    config: &'a TokenomicsConfig,
}

impl<'a> EmissionModel<'a> {
    pub fn new(config: &'a TokenomicsConfig) -> Self {
        Self { config }
    }

    /// (1 − λ)^elapsed in WAD fixed point, clamped to [MIN_DECAY_WAD, WAD]. Below the floor the
    /// rounding of the squaring chain would dominate, so the curve flattens there.
    pub fn decay_wad(&self, elapsed: u64) -> u128 {
        let lambda = self.config.decay_per_block_ppm as u128 * (WAD / PPM_DENOMINATOR);
        let mut base = WAD - lambda.min(WAD - 1);
        let mut acc = WAD;
        let mut exp = elapsed;

        while exp > 0 {
            if exp & 1 == 1 {
                acc = wad_mul(acc, base);
            }
            exp >>= 1;
            if exp > 0 {
                base = wad_mul(base, base);
            }
            if acc <= MIN_DECAY_WAD {
                break;
            }
        }

        acc.max(MIN_DECAY_WAD)
    }

    /// Research multiplier in basis points, in [10_000, 10_000 + cap].
    pub fn research_multiplier_bps(&self, research_value: u128) -> u128 {
        let bonus = research_value
            .saturating_mul(self.config.research_alpha_ppm as u128)
            / 100;
        BPS_DENOMINATOR + bonus.min(self.config.max_research_bonus_bps as u128)
    }

    pub fn decayed_emission(&self, elapsed: u64, research_value: u128) -> Result<Amount, MinedError> {
        let decayed = scale_wad(self.config.initial_emission, self.decay_wad(elapsed))
            .ok_or(MinedError::ArithmeticOverflow)?;
        decayed
            .checked_mul(self.research_multiplier_bps(research_value))
            .map(|v| v / BPS_DENOMINATOR)
            .ok_or(MinedError::ArithmeticOverflow)
    }
}

/// floor(amount × factor / WAD) for factor ≤ WAD, split into whole and fractional WAD parts so
/// the intermediate products stay below u128::MAX.
fn scale_wad(amount: u128, factor: u128) -> Option<u128> {
    let whole = (amount / WAD).checked_mul(factor)?;
    let frac = (amount % WAD).checked_mul(factor)? / WAD;
    whole.checked_add(frac)
}
