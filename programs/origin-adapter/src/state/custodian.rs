use common::{alloy_primitives::Address, ResourceId};
use ruint::aliases::U256;

/// Adapter configuration. The adapter's own native balance holds the fees collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Custodian {
    /// Address the adapter is deployed at.
    pub address: Address,

    /// Bridge every deposit is handed to. Fixed at initialization.
    pub bridge_address: Address,
    pub resource_id: ResourceId,

    /// Target adapter that envelopes are addressed to and that withdrawal credentials must
    /// name. Zero until the owner sets it.
    pub target_adapter: Address,
    pub deposit_fee: U256,

    /// Adapter's owner.
    pub owner: Address,
    pub pending_owner: Option<Address>,
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
