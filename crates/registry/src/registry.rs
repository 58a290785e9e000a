use std::collections::{BTreeMap, HashMap};

use lbc_ledger::{Coin, CollateralLedger};
use lbc_primitives::{Address, CallContext, ProviderId, ProviderType, Wei};

use crate::{
    errors::{ProviderLookup, RegistryError, RegistryResult},
    record::{ProviderRecord, RegisterProvider},
};

/// Provider records keyed by id, with an owner index.
///
/// Records are never removed, so ids are never reused and an owner can only
/// ever register once.
#[derive(Clone, Debug, Default)]
pub struct ProviderRegistry {
    records: BTreeMap<ProviderId, ProviderRecord>,
    by_owner: HashMap<Address, ProviderId>,

    /// Last id handed out, `None` before the first registration.
    last_id: Option<ProviderId>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the caller as a provider, bonding the value attached to the
    /// call into `ledger`.
    ///
    /// Checks run in a fixed order and the first failing one is reported.
    /// Nothing is mutated unless every check passes.
    pub fn register(
        &mut self,
        ledger: &mut CollateralLedger,
        ctx: &CallContext,
        req: &RegisterProvider,
        minimum_collateral: Wei,
    ) -> RegistryResult<ProviderId> {
        if req.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if req.api_url.is_empty() {
            return Err(RegistryError::EmptyUrl);
        }

        let provider_type: ProviderType = req.provider_type.parse()?;

        let owner = ctx.sender();
        if !ctx.is_direct() {
            return Err(RegistryError::CallerNotEligible(owner));
        }

        if let Some(id) = self.by_owner.get(&owner) {
            return Err(RegistryError::AlreadyRegistered { owner, id: *id });
        }

        let bond = ctx.value();
        if bond < minimum_collateral {
            return Err(RegistryError::InsufficientCollateral {
                provided: bond,
                required: minimum_collateral,
            });
        }

        let id = match self.last_id {
            None => ProviderId::FIRST,
            Some(last) => last.checked_next().ok_or(RegistryError::IdSpaceExhausted)?,
        };

        // Last fallible step, if it fails nothing else has been touched.
        ledger.deposit(Coin::attached(ctx))?;

        let record = ProviderRecord::new(
            id,
            owner,
            req.name.clone(),
            req.api_url.clone(),
            req.status,
            provider_type,
        );
        self.records.insert(id, record);
        self.by_owner.insert(owner, id);
        self.last_id = Some(id);

        Ok(id)
    }

    /// Changes the status flag of a provider.  Only the record owner may.
    pub fn set_provider_status(
        &mut self,
        caller: Address,
        id: ProviderId,
        status: bool,
    ) -> RegistryResult<()> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(RegistryError::UnknownProvider(ProviderLookup::Id(id)))?;

        if record.owner() != caller {
            return Err(RegistryError::NotProviderOwner { id, caller });
        }

        record.set_status(status);
        Ok(())
    }

    pub fn get_provider(&self, id: ProviderId) -> Option<&ProviderRecord> {
        self.records.get(&id)
    }

    pub fn provider_by_owner(&self, owner: &Address) -> Option<&ProviderRecord> {
        self.by_owner.get(owner).and_then(|id| self.records.get(id))
    }

    /// Resolves `owner` to a provider that is currently accepting quotes.
    pub fn resolve_active(&self, owner: &Address) -> RegistryResult<&ProviderRecord> {
        let record = self
            .provider_by_owner(owner)
            .ok_or(RegistryError::UnknownProvider(ProviderLookup::Owner(*owner)))?;

        if !record.status() {
            return Err(RegistryError::ProviderInactive(record.id()));
        }

        Ok(record)
    }

    /// All providers in id order.
    pub fn providers(&self) -> impl Iterator<Item = &ProviderRecord> {
        self.records.values()
    }

    pub fn provider_count(&self) -> usize {
        self.records.len()
    }

    /// Registered, active, and still bonded at least `minimum_collateral`.
    pub fn is_operational(
        &self,
        ledger: &CollateralLedger,
        owner: &Address,
        minimum_collateral: Wei,
    ) -> bool {
        self.resolve_active(owner).is_ok() && ledger.is_bonded(owner, minimum_collateral)
    }
}
