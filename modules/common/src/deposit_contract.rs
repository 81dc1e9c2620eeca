//! Beacon chain deposit contract the target adapter forwards to. Its validation is opaque to the
//! relay: whatever it rejects, the relay rejects.

use crate::ledger::{Call, Ledger, LedgerError};
use alloy_primitives::Address;
use deposit_relay_messages::ExecutionPayload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DepositContractError {
    #[error("deposit rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub trait DepositContract {
    fn address(&self) -> Address;

    /// `deposit(pubkey, withdrawal_credentials, signature, deposit_data_root)` with
    /// `call.value` attached.
    fn deposit(
        &mut self,
        ledger: &mut Ledger,
        call: Call,
        payload: &ExecutionPayload,
    ) -> Result<(), DepositContractError>;
}
