//! Solidity interfaces whose ABI the relay speaks on both chains.

use alloy_primitives::Address;
use alloy_sol_types::{sol, SolCall};

sol! {
    /// Entry point the bridge's generic handler calls on the target chain.
    interface IDepositAdapterTarget {
        function execute(address originDepositor, bytes depositContractCalldata) external;
    }

    /// Beacon chain deposit contract.
    interface IDepositContract {
        function deposit(
            bytes pubkey,
            bytes withdrawal_credentials,
            bytes signature,
            bytes32 deposit_data_root
        ) external payable;
    }
}

/// Selector of `execute(address,bytes)`.
pub const EXECUTE_SELECTOR: [u8; 4] = IDepositAdapterTarget::executeCall::SELECTOR;

/// Recovers `(originDepositor, depositContractCalldata)` from the calldata a generic handler
/// issues to the target adapter.
pub fn decode_execute_calldata(calldata: &[u8]) -> Result<(Address, Vec<u8>), &'static str> {
    let call = IDepositAdapterTarget::executeCall::abi_decode(calldata, true)
        .map_err(|_| "Calldata is not a valid execute(address,bytes) call")?;

    Ok((call.originDepositor, call.depositContractCalldata.to_vec()))
}

/// ABI encoding of `(address(0), data)` without its leading address word. The bridge handler
/// prepends the depositor word to rebuild the `execute` parameters.
pub(crate) fn encode_execution_tail(data: &[u8]) -> Vec<u8> {
    let call = IDepositAdapterTarget::executeCall {
        originDepositor: Address::ZERO,
        depositContractCalldata: data.to_vec().into(),
    };

    let mut encoded = Vec::with_capacity(call.abi_encoded_size());
    call.abi_encode_raw(&mut encoded);
    encoded.split_off(WORD_LEN)
}

pub(crate) const WORD_LEN: usize = 32;

/// Interprets an ABI word as a `usize`, failing when the value does not fit.
pub(crate) fn word_to_usize(word: &[u8]) -> Option<usize> {
    let (high, low) = word.split_at(word.len().checked_sub(8)?);
    if high.iter().any(|b| *b != 0) {
        return None;
    }

    let low: [u8; 8] = low.try_into().ok()?;
    usize::try_from(u64::from_be_bytes(low)).ok()
}

/// Validates an execution tail produced by [encode_execution_tail] and returns the execution
/// data it carries.
pub(crate) fn decode_execution_tail(tail: &[u8]) -> Result<&[u8], &'static str> {
    const HEAD_LEN: usize = 64;

    if tail.len() < HEAD_LEN {
        return Err("Execution tail too short. Need at least 64 bytes");
    }

    let (head, body) = tail.split_at(HEAD_LEN);
    let (offset, len) = head.split_at(WORD_LEN);

    if word_to_usize(offset) != Some(HEAD_LEN) {
        return Err("Execution data offset must be 0x40");
    }

    let len = word_to_usize(len).ok_or("Execution data length overflow")?;
    let padded_len = len
        .checked_next_multiple_of(WORD_LEN)
        .ok_or("Execution data length overflow")?;
    if body.len() != padded_len {
        return Err("Execution data length mismatch");
    }

    let (data, padding) = body.split_at(len);
    if padding.iter().any(|b| *b != 0) {
        return Err("Execution data padding must be zero");
    }

    Ok(data)
}
