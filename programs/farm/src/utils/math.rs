// farm/utils/math.rs

// external dependencies
use anchor_lang::prelude::*;
use primitive_types::U256;

// local dependencies
use crate::errors::FarmError;

/// `a * b / denominator` with a 256-bit intermediate product, rounding down.
/// Fails when the denominator is zero or the quotient does not fit in a u128.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    let quotient = U256::from(a)
        .checked_mul(U256::from(b))
        .and_then(|product| product.checked_div(U256::from(denominator)))
        .ok_or(FarmError::MathOverflow)?;

    if quotient > U256::from(u128::MAX) {
        return err!(FarmError::MathOverflow);
    }

    Ok(quotient.low_u128())
}
