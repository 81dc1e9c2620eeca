use crate::{
    error::{Result, TargetAdapterError},
    events::DepositRelayed,
    state::Custodian,
};
use common::{
    admin::Capability,
    alloy_primitives::Address,
    deposit_contract::DepositContract,
    ledger::{Call, Ledger},
    messages::ExecutionPayload,
};

/// Forwards a relayed deposit to the deposit contract, attaching the adapter's entire balance.
pub fn execute<D>(
    ledger: &mut Ledger,
    deposit_contract: &mut D,
    custodian: &Custodian,
    handler: Capability,
    origin_adapter: &Address,
    execution_data: &[u8],
) -> Result<()>
where
    D: DepositContract,
{
    if !custodian.is_origin_authorized(origin_adapter) {
        tracing::debug!(%origin_adapter, "origin adapter not authorized");
        return Err(TargetAdapterError::UnauthorizedOrigin);
    }

    let payload = ExecutionPayload::parse(execution_data)
        .map_err(TargetAdapterError::MalformedExecutionPayload)?;
    common::check_withdrawal_credentials(&payload, &custodian.address)?;

    if deposit_contract.address() != custodian.deposit_contract {
        return Err(TargetAdapterError::InvalidDepositContract);
    }

    let amount = ledger.balance_of(&custodian.address);

    ledger.emit(
        &custodian.address,
        &DepositRelayed {
            pubkey: payload.pubkey.clone(),
            withdrawal_credentials: payload.withdrawal_credentials.clone(),
            signature: payload.signature.clone(),
            deposit_data_root: payload.deposit_data_root,
        },
    )?;

    deposit_contract
        .deposit(
            ledger,
            Call::with_value(custodian.address, amount),
            &payload,
        )
        .map_err(|err| {
            tracing::warn!(%err, %amount, "deposit contract rejected deposit");
            TargetAdapterError::DepositForwardingFailed(err)
        })?;

    tracing::info!(
        handler = %handler.holder(),
        %origin_adapter,
        %amount,
        pubkey = %hex::encode(&payload.pubkey),
        "deposit relayed"
    );

    // Done.
    Ok(())
}
