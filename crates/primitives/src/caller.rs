use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::amount::Wei;

/// How the caller reached the bridge.
///
/// This is resolved once by whoever fronts the bridge (the host environment
/// knows whether the sender has code) and is never re-derived inside the core.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerKind {
    /// An identity directly controlled by a key holder.
    Direct,

    /// A contract or other automated account relaying the call.
    Intermediary,
}

/// Per-call context, the equivalent of the host's message/block globals.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CallContext {
    sender: Address,
    kind: CallerKind,
    value: Wei,
    timestamp: u64,
}

impl CallContext {
    pub fn new(sender: Address, kind: CallerKind, value: Wei, timestamp: u64) -> Self {
        Self {
            sender,
            kind,
            value,
            timestamp,
        }
    }

    /// Context for a directly controlled identity carrying no value.
    pub fn direct(sender: Address) -> Self {
        Self::new(sender, CallerKind::Direct, Wei::ZERO, 0)
    }

    /// Context for an intermediary account carrying no value.
    pub fn intermediary(sender: Address) -> Self {
        Self::new(sender, CallerKind::Intermediary, Wei::ZERO, 0)
    }

    /// Attaches value to the call.
    pub fn with_value(mut self, value: Wei) -> Self {
        self.value = value;
        self
    }

    /// Sets the timestamp the call executes at.
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn kind(&self) -> CallerKind {
        self.kind
    }

    pub fn value(&self) -> Wei {
        self.value
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Whether the call can be attributed to a directly controlled identity.
    pub fn is_direct(&self) -> bool {
        self.kind == CallerKind::Direct
    }
}
