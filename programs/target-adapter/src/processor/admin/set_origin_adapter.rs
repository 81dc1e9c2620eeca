use crate::{error::Result, events::DepositAdapterOriginSet, state::Custodian};
use common::{admin::Capability, alloy_primitives::Address, ledger::Ledger};

/// Adds `origin_adapter` to or removes it from the authorized set. Repeating the current
/// setting is a no-op that still emits [DepositAdapterOriginSet].
pub fn set_origin_adapter(
    ledger: &mut Ledger,
    custodian: &mut Custodian,
    admin: Capability,
    origin_adapter: &Address,
    authorized: bool,
) -> Result<()> {
    let changed = if authorized {
        custodian.authorized_origins.insert(*origin_adapter)
    } else {
        custodian.authorized_origins.remove(origin_adapter)
    };
    tracing::info!(
        owner = %admin.holder(),
        %origin_adapter,
        authorized,
        changed,
        "origin adapter set"
    );

    ledger.emit(
        &custodian.address,
        &DepositAdapterOriginSet {
            origin_adapter: *origin_adapter,
            authorized,
        },
    )?;

    // Done.
    Ok(())
}
