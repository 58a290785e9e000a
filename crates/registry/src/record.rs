use lbc_primitives::{Address, ProviderId, ProviderType};
use serde::{Deserialize, Serialize};

/// A registered liquidity provider.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ProviderRecord {
    id: ProviderId,
    owner: Address,
    name: String,
    api_url: String,
    status: bool,
    provider_type: ProviderType,
}

impl ProviderRecord {
    pub(crate) fn new(
        id: ProviderId,
        owner: Address,
        name: String,
        api_url: String,
        status: bool,
        provider_type: ProviderType,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            api_url,
            status,
            provider_type,
        }
    }

    pub fn id(&self) -> ProviderId {
        self.id
    }

    /// Identity that registered the record.  Never changes.
    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Whether the provider is currently accepting quotes.
    pub fn status(&self) -> bool {
        self.status
    }

    pub fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    pub(crate) fn set_status(&mut self, status: bool) {
        self.status = status;
    }
}

/// Registration parameters as submitted by the caller.
///
/// The provider type is kept as the raw string so that an unrecognized value is
/// reported in the same validation order as the other fields.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegisterProvider {
    pub name: String,
    pub api_url: String,
    pub status: bool,
    pub provider_type: String,
}

impl RegisterProvider {
    pub fn new(
        name: impl Into<String>,
        api_url: impl Into<String>,
        status: bool,
        provider_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            api_url: api_url.into(),
            status,
            provider_type: provider_type.into(),
        }
    }
}
