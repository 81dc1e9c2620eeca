use crate::{
    error::{OriginAdapterError, Result},
    events::DepositRelayed,
    state::Custodian,
};
use common::{
    bridge::{Bridge, BridgeDeposit},
    ledger::{Call, Ledger},
    messages::{Envelope, ExecutionPayload},
    DomainId, ENVELOPE_VARIANT,
};
use ruint::aliases::U256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositArgs {
    pub destination_domain_id: DomainId,

    /// Value forwarded to the bridge, on top of the deposit fee.
    pub deposit_amount: U256,

    /// Encoded [ExecutionPayload].
    pub execution_data: Vec<u8>,

    /// Passed through to the bridge untouched.
    pub fee_data: Vec<u8>,
}

/// Relays a deposit to the target adapter. `call.value` must be the deposit fee plus
/// `deposit_amount`; the fee stays here and `deposit_amount` goes to the bridge.
///
/// Returns the nonce the bridge assigned to the deposit.
pub fn deposit<B>(
    ledger: &mut Ledger,
    bridge: &mut B,
    custodian: &Custodian,
    call: &Call,
    args: DepositArgs,
) -> Result<u64>
where
    B: Bridge,
{
    let DepositArgs {
        destination_domain_id,
        deposit_amount,
        execution_data,
        fee_data,
    } = args;

    let expected_value = custodian
        .deposit_fee
        .checked_add(deposit_amount)
        .ok_or(OriginAdapterError::IncorrectFee)?;
    if call.value != expected_value {
        tracing::debug!(value = %call.value, %expected_value, "incorrect fee");
        return Err(OriginAdapterError::IncorrectFee);
    }

    let payload = ExecutionPayload::parse(&execution_data)
        .map_err(OriginAdapterError::MalformedExecutionPayload)?;
    common::check_withdrawal_credentials(&payload, &custodian.target_adapter)?;

    if bridge.address() != custodian.bridge_address {
        return Err(OriginAdapterError::InvalidBridge);
    }

    let envelope = Envelope::new(
        ENVELOPE_VARIANT,
        custodian.target_adapter,
        custodian.address,
        execution_data,
    )
    .to_vec();

    let deposit_nonce = bridge.deposit(
        ledger,
        Call::with_value(custodian.address, deposit_amount),
        BridgeDeposit {
            destination_domain_id,
            resource_id: custodian.resource_id,
            deposit_data: &envelope,
            fee_data: &fee_data,
        },
    )?;

    tracing::info!(
        depositor = %call.caller,
        destination_domain_id,
        deposit_nonce,
        %deposit_amount,
        envelope = %hex::encode(&envelope),
        "deposit relayed"
    );

    let ExecutionPayload {
        pubkey,
        withdrawal_credentials,
        signature,
        deposit_data_root,
    } = payload;
    ledger.emit(
        &custodian.address,
        &DepositRelayed {
            envelope: envelope.into(),
            destination_domain_id,
            deposit_nonce,
            pubkey,
            withdrawal_credentials,
            signature,
            deposit_data_root,
        },
    )?;

    Ok(deposit_nonce)
}
