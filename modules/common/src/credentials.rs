use alloy_primitives::Address;
use deposit_relay_messages::ExecutionPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    InvalidLength,
    WrongAddress,
}

/// Withdrawal credentials must be 32 bytes and end with `expected`. Anything else would send the
/// validator's funds somewhere the relay cannot recover them from.
pub fn check_withdrawal_credentials(
    payload: &ExecutionPayload,
    expected: &Address,
) -> Result<(), CredentialsError> {
    match payload.credentials_address() {
        None => Err(CredentialsError::InvalidLength),
        Some(address) if address != *expected => Err(CredentialsError::WrongAddress),
        Some(_) => Ok(()),
    }
}
