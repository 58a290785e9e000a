use lbc_primitives::{Address, Wei};
use serde::{Deserialize, Serialize};

/// Configuration installed once when the bridge is deployed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct InitParams {
    /// Administrative owner.  Can be handed over with
    /// [`transfer_ownership`](crate::LiquidityBridge::transfer_ownership).
    pub owner: Address,

    /// Bond a provider has to post to register, and hold to stay operational.
    pub minimum_collateral: Wei,

    /// Address quotes must name to be valid on this bridge.
    pub bridge_address: Address,
}
