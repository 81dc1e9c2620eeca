use common::{bridge::BridgeError, ledger::LedgerError, CredentialsError};

pub type Result<T> = std::result::Result<T, OriginAdapterError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OriginAdapterError {
    /// Only the adapter's owner is permitted.
    #[error("DepositOrigin: sender doesn't have admin role")]
    OwnerOnly,

    #[error("DepositOrigin: current fee is equal to new fee")]
    FeeUnchanged,

    /// Attached value is not `deposit_fee + deposit_amount`.
    #[error("DepositOrigin: incorrect fee supplied")]
    IncorrectFee,

    #[error("DepositOrigin: malformed execution data: {0}")]
    MalformedExecutionPayload(&'static str),

    #[error("DepositOrigin: invalid withdrawal_credentials length")]
    InvalidCredentialsLength,

    #[error("DepositOrigin: wrong withdrawal_credentials address")]
    WrongCredentialsAddress,

    /// Bridge handle does not match the configured bridge.
    #[error("DepositOrigin: invalid bridge")]
    InvalidBridge,

    #[error("DepositOrigin: bridge rejected deposit: {0}")]
    BridgeRejected(BridgeError),

    #[error("DepositOrigin: not enough balance")]
    InsufficientBalance,

    #[error("DepositOrigin: withdrawal failed")]
    WithdrawalFailed,

    #[error("DepositOrigin: invalid new owner")]
    InvalidNewOwner,

    /// Specified address is already the adapter's owner.
    #[error("DepositOrigin: already owner")]
    AlreadyOwner,

    #[error("DepositOrigin: no ownership transfer request")]
    NoTransferOwnershipRequest,

    /// Only the adapter's pending owner is permitted.
    #[error("DepositOrigin: sender is not pending owner")]
    NotPendingOwner,

    #[error("DepositOrigin: {0}")]
    Ledger(#[from] LedgerError),
}

impl From<CredentialsError> for OriginAdapterError {
    fn from(err: CredentialsError) -> Self {
        match err {
            CredentialsError::InvalidLength => Self::InvalidCredentialsLength,
            CredentialsError::WrongAddress => Self::WrongCredentialsAddress,
        }
    }
}

impl From<BridgeError> for OriginAdapterError {
    fn from(err: BridgeError) -> Self {
        Self::BridgeRejected(err)
    }
}
