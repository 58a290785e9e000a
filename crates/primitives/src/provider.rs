use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// Incrementally assigned provider identifier.  The first provider gets `1`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(u64);

impl_opaque_thin_wrapper!(ProviderId => u64);

impl ProviderId {
    /// The id handed to the first registered provider.
    pub const FIRST: ProviderId = ProviderId(1);

    /// Returns the id following this one, if it does not overflow.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a bridging quote.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteKind {
    PegIn,
    PegOut,
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuoteKind::PegIn => "pegin",
            QuoteKind::PegOut => "pegout",
        };
        write!(f, "{s}")
    }
}

/// Capability tag a provider registers with.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Services pegin quotes only.
    PegIn,

    /// Services pegout quotes only.
    PegOut,

    /// Services both directions.
    Both,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::PegIn => "pegin",
            ProviderType::PegOut => "pegout",
            ProviderType::Both => "both",
        }
    }

    /// Whether a provider of this type may service quotes of `kind`.
    pub fn serves(&self, kind: QuoteKind) -> bool {
        matches!(
            (self, kind),
            (ProviderType::Both, _)
                | (ProviderType::PegIn, QuoteKind::PegIn)
                | (ProviderType::PegOut, QuoteKind::PegOut)
        )
    }
}

impl FromStr for ProviderType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ParseError::EmptyProviderType),
            "pegin" => Ok(ProviderType::PegIn),
            "pegout" => Ok(ProviderType::PegOut),
            "both" => Ok(ProviderType::Both),
            other => Err(ParseError::UnknownProviderType(other.to_owned())),
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
