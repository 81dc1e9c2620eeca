//! Execution Payload

use crate::abi::IDepositContract;
use alloy_primitives::{Address, Bytes, B256};
use alloy_sol_types::SolCall;

/// Parameters of a beacon chain deposit, relayed verbatim from the origin chain to the deposit
/// contract on the target chain.
///
/// On the wire this is the ABI parameter block of
/// `deposit(bytes,bytes,bytes,bytes32)`, without the selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionPayload {
    pub pubkey: Bytes,
    pub withdrawal_credentials: Bytes,
    pub signature: Bytes,
    pub deposit_data_root: B256,
}

impl ExecutionPayload {
    pub const PUBKEY_LEN: usize = 48;
    pub const WITHDRAWAL_CREDENTIALS_LEN: usize = 32;
    pub const SIGNATURE_LEN: usize = 96;

    pub fn parse(span: &[u8]) -> Result<Self, &'static str> {
        let call = IDepositContract::depositCall::abi_decode_raw(span, true)
            .map_err(|_| "ExecutionPayload is not a valid (bytes,bytes,bytes,bytes32) encoding")?;

        Ok(call.into())
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let call = self.to_deposit_call();
        let mut encoded = Vec::with_capacity(call.abi_encoded_size());
        call.abi_encode_raw(&mut encoded);
        encoded
    }

    /// Full calldata for the deposit contract, selector included.
    pub fn to_deposit_calldata(&self) -> Vec<u8> {
        self.to_deposit_call().abi_encode()
    }

    /// Address encoded in the trailing 20 bytes of the withdrawal credentials. Returns `None`
    /// unless the credentials are exactly 32 bytes.
    pub fn credentials_address(&self) -> Option<Address> {
        if self.withdrawal_credentials.len() != Self::WITHDRAWAL_CREDENTIALS_LEN {
            return None;
        }

        // The leading 12 bytes carry the credentials prefix.
        let (_, address) = self.withdrawal_credentials.split_at(12);
        Some(Address::from_slice(address))
    }

    fn to_deposit_call(&self) -> IDepositContract::depositCall {
        IDepositContract::depositCall {
            pubkey: self.pubkey.clone(),
            withdrawal_credentials: self.withdrawal_credentials.clone(),
            signature: self.signature.clone(),
            deposit_data_root: self.deposit_data_root,
        }
    }
}

impl From<IDepositContract::depositCall> for ExecutionPayload {
    fn from(call: IDepositContract::depositCall) -> Self {
        Self {
            pubkey: call.pubkey,
            withdrawal_credentials: call.withdrawal_credentials,
            signature: call.signature,
            deposit_data_root: call.deposit_data_root,
        }
    }
}
