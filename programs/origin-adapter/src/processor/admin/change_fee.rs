use crate::{
    error::{OriginAdapterError, Result},
    events::FeeChanged,
    state::Custodian,
};
use common::{admin::Capability, ledger::Ledger};
use ruint::aliases::U256;

pub fn change_fee(
    ledger: &mut Ledger,
    custodian: &mut Custodian,
    admin: Capability,
    new_fee: U256,
) -> Result<()> {
    if new_fee == custodian.deposit_fee {
        return Err(OriginAdapterError::FeeUnchanged);
    }

    tracing::info!(
        owner = %admin.holder(),
        old_fee = %custodian.deposit_fee,
        %new_fee,
        "deposit fee changed"
    );
    custodian.deposit_fee = new_fee;

    ledger.emit(&custodian.address, &FeeChanged { new_fee })?;

    // Done.
    Ok(())
}
