use common::alloy_primitives::Address;
use std::collections::BTreeSet;

/// Adapter configuration. Relayed deposit amounts sit in the adapter's native balance until the
/// next `execute` forwards them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Custodian {
    /// Address the adapter is deployed at. Withdrawal credentials must name it.
    pub address: Address,

    /// Bridge handler, the only caller `execute` accepts.
    pub bridge_address: Address,
    pub deposit_contract: Address,

    /// Origin adapters whose deposits are honored.
    pub authorized_origins: BTreeSet<Address>,

    /// Adapter's owner.
    pub owner: Address,
    pub pending_owner: Option<Address>,
}

impl Custodian {
    pub fn is_origin_authorized(&self, origin_adapter: &Address) -> bool {
        self.authorized_origins.contains(origin_adapter)
    }
}

impl common::admin::Ownable for Custodian {
    fn owner(&self) -> &Address {
        &self.owner
    }

    fn owner_mut(&mut self) -> &mut Address {
        &mut self.owner
    }
}

impl common::admin::PendingOwner for Custodian {
    fn pending_owner(&self) -> &Option<Address> {
        &self.pending_owner
    }

    fn pending_owner_mut(&mut self) -> &mut Option<Address> {
        &mut self.pending_owner
    }
}
