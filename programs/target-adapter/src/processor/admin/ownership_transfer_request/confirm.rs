use crate::{
    error::{Result, TargetAdapterError},
    events::OwnershipTransferred,
    state::Custodian,
};
use common::{
    admin::{utils::pending_owner, Capability},
    ledger::Ledger,
};

pub fn confirm_ownership_transfer_request(
    ledger: &mut Ledger,
    custodian: &mut Custodian,
    new_owner: Capability,
) -> Result<()> {
    let previous_owner = pending_owner::accept_ownership(custodian)
        .ok_or(TargetAdapterError::NoTransferOwnershipRequest)?;
    tracing::info!(%previous_owner, new_owner = %new_owner.holder(), "ownership transferred");

    ledger.emit(
        &custodian.address,
        &OwnershipTransferred {
            previous_owner,
            new_owner: custodian.owner,
        },
    )?;

    // Done.
    Ok(())
}
