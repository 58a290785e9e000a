use std::str::FromStr;

use alloy_primitives::U256;

use crate::errors::ParseError;

/// Value in the smallest native unit.
///
/// All ledger arithmetic on this type goes through `checked_*` so overflow is
/// surfaced as an error instead of wrapping.
pub type Wei = U256;

/// Parses a decimal (or `0x`-prefixed hex) amount string.
pub fn parse_wei(s: &str) -> Result<Wei, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidAmount(s.to_owned()));
    }
    U256::from_str(trimmed).map_err(|_| ParseError::InvalidAmount(s.to_owned()))
}
