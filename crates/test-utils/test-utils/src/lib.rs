//! Shared helpers for liquidity bridge tests.

pub mod keys;
pub mod transfer;
