use crate::consts::*;
use crate::error::MinedError;
use crate::types::*;

/// Helper: check a condition is true and return an error if not
#[inline(always)]
pub fn check_condition<E>(condition: bool, err: E) -> Result<(), E> {
    if !condition {
        return Err(err);
    }
    Ok(())
}

/// Helper: map a puzzle difficulty to the threshold a proof must not exceed.
///
/// target = MAX_PROOF_VALUE / difficulty, so a higher difficulty yields a smaller target and a
/// harder puzzle.
#[inline(always)]
pub fn compute_target(difficulty: u16) -> Result<ProofValue, MinedError> {
    check_difficulty(difficulty)?;
    Ok(MAX_PROOF_VALUE / difficulty as u128)
}

#[inline(always)]
pub fn check_difficulty(difficulty: u16) -> Result<(), MinedError> {
    check_condition(
        (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty),
        MinedError::InvalidDifficulty,
    )
}

#[inline(always)]
pub fn check_complexity(complexity: u8) -> Result<(), MinedError> {
    check_condition(
        (MIN_COMPLEXITY..=MAX_COMPLEXITY).contains(&complexity),
        MinedError::InvalidComplexity,
    )
}

#[inline(always)]
pub fn check_significance(significance: u8) -> Result<(), MinedError> {
    check_condition(
        (MIN_SIGNIFICANCE..=MAX_SIGNIFICANCE).contains(&significance),
        MinedError::InvalidSignificance,
    )
}

/// Helper: research value = complexity × significance × research_scale
#[inline(always)]
pub fn compute_research_value(
    complexity: u8,
    significance: u8,
    research_scale: u128,
) -> Result<u128, MinedError> {
    (complexity as u128)
        .checked_mul(significance as u128)
        .and_then(|v| v.checked_mul(research_scale))
        .ok_or(MinedError::RewardOverflow)
}

/// Helper: render a base-unit amount as a decimal token string, trimming trailing zeros.
pub fn amount_to_ui(amount: Amount) -> String {
    let whole = amount / ONE_MINED;
    let frac = amount % ONE_MINED;
    if frac == 0 {
        return whole.to_string();
    }

    let frac = format!("{:0width$}", frac, width = TOKEN_DECIMALS as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// Helper: parse a decimal token string ("12", "0.5") into base units.
pub fn ui_to_amount(text: &str) -> Option<Amount> {
    let (whole, frac) = match text.split_once('.') {
        Some((w, f)) => (w, f),
        None => (text, ""),
    };

    if frac.len() > TOKEN_DECIMALS as usize
        || (whole.is_empty() && frac.is_empty())
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac_units: u128 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac, width = TOKEN_DECIMALS as usize);
        padded.parse().ok()?
    };

    whole.checked_mul(ONE_MINED)?.checked_add(frac_units)
}
