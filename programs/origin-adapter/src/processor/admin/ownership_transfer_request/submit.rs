use crate::{
    error::{OriginAdapterError, Result},
    state::Custodian,
};
use common::{
    admin::{utils::pending_owner, Capability},
    alloy_primitives::Address,
};

pub fn submit_ownership_transfer_request(
    custodian: &mut Custodian,
    admin: Capability,
    new_owner: &Address,
) -> Result<()> {
    if *new_owner == Address::ZERO {
        return Err(OriginAdapterError::InvalidNewOwner);
    }
    if *new_owner == admin.holder() {
        return Err(OriginAdapterError::AlreadyOwner);
    }

    pending_owner::transfer_ownership(custodian, new_owner);
    tracing::info!(owner = %admin.holder(), %new_owner, "ownership transfer requested");

    // Done.
    Ok(())
}
