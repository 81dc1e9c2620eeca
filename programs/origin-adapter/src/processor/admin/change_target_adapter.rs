use crate::{error::Result, events::DepositAdapterOriginChanged, state::Custodian};
use common::{admin::Capability, alloy_primitives::Address, ledger::Ledger};

/// Points envelopes at `target_adapter`. Setting the current value again is allowed and still
/// emits [DepositAdapterOriginChanged].
pub fn change_target_adapter(
    ledger: &mut Ledger,
    custodian: &mut Custodian,
    admin: Capability,
    target_adapter: &Address,
) -> Result<()> {
    tracing::info!(
        owner = %admin.holder(),
        previous = %custodian.target_adapter,
        %target_adapter,
        "target adapter changed"
    );
    custodian.target_adapter = *target_adapter;

    ledger.emit(
        &custodian.address,
        &DepositAdapterOriginChanged {
            target_adapter: *target_adapter,
        },
    )?;

    // Done.
    Ok(())
}
