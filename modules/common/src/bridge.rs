//! Generic message bridge the origin adapter hands envelopes to.

use crate::{
    ledger::{Call, Ledger, LedgerError},
    DomainId, ResourceId,
};
use alloy_primitives::Address;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("bridge rejected deposit: {0}")]
    Rejected(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Arguments of the bridge's `deposit` entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeDeposit<'a> {
    pub destination_domain_id: DomainId,
    pub resource_id: ResourceId,
    pub deposit_data: &'a [u8],
    pub fee_data: &'a [u8],
}

pub trait Bridge {
    fn address(&self) -> Address;

    /// Accepts `request` for relay, taking custody of `call.value`. Returns the deposit nonce
    /// the bridge assigned.
    fn deposit(
        &mut self,
        ledger: &mut Ledger,
        call: Call,
        request: BridgeDeposit<'_>,
    ) -> Result<u64, BridgeError>;
}
