use common::{deposit_contract::DepositContractError, ledger::LedgerError, CredentialsError};

pub type Result<T> = std::result::Result<T, TargetAdapterError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetAdapterError {
    /// Only the adapter's owner is permitted.
    #[error("DepositTarget: sender doesn't have admin role")]
    OwnerOnly,

    /// Deposit contract has no code, or the handle supplied is not the configured contract.
    #[error("DepositTarget: invalid deposit contract")]
    InvalidDepositContract,

    /// Only the bridge handler is permitted.
    #[error("DepositTarget: sender must be handler contract")]
    UnauthorizedCaller,

    #[error("DepositTarget: invalid origin depositor")]
    UnauthorizedOrigin,

    #[error("DepositTarget: malformed calldata: {0}")]
    MalformedCalldata(&'static str),

    #[error("DepositTarget: malformed execution data: {0}")]
    MalformedExecutionPayload(&'static str),

    #[error("DepositTarget: invalid withdrawal_credentials length")]
    InvalidCredentialsLength,

    #[error("DepositTarget: wrong withdrawal_credentials address")]
    WrongCredentialsAddress,

    #[error("DepositTarget: deposit failed")]
    DepositForwardingFailed(DepositContractError),

    #[error("DepositTarget: not enough balance")]
    InsufficientBalance,

    #[error("DepositTarget: withdrawal failed")]
    WithdrawalFailed,

    #[error("DepositTarget: invalid new owner")]
    InvalidNewOwner,

    /// Specified address is already the adapter's owner.
    #[error("DepositTarget: already owner")]
    AlreadyOwner,

    #[error("DepositTarget: no ownership transfer request")]
    NoTransferOwnershipRequest,

    /// Only the adapter's pending owner is permitted.
    #[error("DepositTarget: sender is not pending owner")]
    NotPendingOwner,

    #[error("DepositTarget: {0}")]
    Ledger(#[from] LedgerError),
}

impl From<CredentialsError> for TargetAdapterError {
    fn from(err: CredentialsError) -> Self {
        match err {
            CredentialsError::InvalidLength => Self::InvalidCredentialsLength,
            CredentialsError::WrongAddress => Self::WrongCredentialsAddress,
        }
    }
}
