//! Stands in for the bridge's relayers and generic handler: picks up a recorded deposit,
//! releases its value on the destination chain and calls the target adapter.

use super::{bridge::RecordedDeposit, deposit_contract::TestDepositContract, TARGET_HANDLER};
use common::{
    ledger::{Call, Ledger, LedgerError},
    messages::{raw, MalformedEnvelope},
    ENVELOPE_VARIANT,
};
use target_adapter::{error::TargetAdapterError, TargetAdapter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    MalformedEnvelope(MalformedEnvelope),
    WrongTargetAdapter,
    Ledger(LedgerError),
    Target(TargetAdapterError),
}

pub fn relay(
    ledger: &mut Ledger,
    target: &TargetAdapter,
    deposit_contract: &mut TestDepositContract,
    deposit: &RecordedDeposit,
) -> Result<(), RelayError> {
    let envelope = raw::Envelope::parse(&deposit.deposit_data, ENVELOPE_VARIANT)
        .map_err(RelayError::MalformedEnvelope)?;
    if envelope.target_adapter() != target.address() {
        return Err(RelayError::WrongTargetAdapter);
    }

    ledger
        .airdrop(&target.address(), deposit.value)
        .map_err(RelayError::Ledger)?;

    target
        .execute_calldata(
            ledger,
            deposit_contract,
            Call::new(TARGET_HANDLER),
            &envelope.handler_calldata(),
        )
        .map_err(RelayError::Target)
}
