//! Fixed-point denomination for token amounts
//!
//! The token contract accounts in 10^9 fixed-point units. Whole-token
//! amounts from the command line are scaled up before encoding; addresses,
//! prices, and timing parameters are never scaled.

use alloy::primitives::U256;

/// Decimals of the token's fixed-point representation
pub const TOKEN_DECIMALS: u8 = 9;

fn unit() -> U256 {
    U256::from(10u64).pow(U256::from(TOKEN_DECIMALS))
}

/// Scales a whole-token amount into contract units.
///
/// Returns `None` when the scaled amount does not fit in a uint256.
pub fn to_token_units(amount: U256) -> Option<U256> {
    amount.checked_mul(unit())
}

/// Inverse of [`to_token_units`].
pub fn from_token_units(units: U256) -> U256 {
    units / unit()
}
