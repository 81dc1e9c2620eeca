use crate::{
    error::{OriginAdapterError, Result},
    events::Withdrawal,
    state::Custodian,
};
use common::{admin::Capability, alloy_primitives::Address, ledger::Ledger};
use ruint::aliases::U256;

/// Sends `amount` of the collected fees to `to`.
pub fn withdraw(
    ledger: &mut Ledger,
    custodian: &Custodian,
    admin: Capability,
    to: &Address,
    amount: U256,
) -> Result<()> {
    let balance = ledger.balance_of(&custodian.address);
    if amount > balance {
        tracing::debug!(%amount, %balance, "withdrawal exceeds balance");
        return Err(OriginAdapterError::InsufficientBalance);
    }

    ledger
        .transfer(&custodian.address, to, amount)
        .map_err(|err| {
            tracing::warn!(%to, %amount, %err, "withdrawal failed");
            OriginAdapterError::WithdrawalFailed
        })?;
    tracing::info!(owner = %admin.holder(), %to, %amount, "withdrawal");

    ledger.emit(&custodian.address, &Withdrawal { to: *to, amount })?;

    // Done.
    Ok(())
}
