//! Domain error model.

use thiserror::Error;

use crate::id::{AccountId, OperationId};
use crate::status::OperationStatus;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Two families live here. Failures raised while executing an operation
/// (`InsufficientFunds`, `AccountNotSet`, `AccountNotFound` while resolving a target,
/// `TargetMismatch`, `BalanceOverflow`) are expected business outcomes; the ledger
/// records them as a `Cancelled` status. Everything else is a usage or missing-state
/// error and always reaches the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An account with the same id is already registered.
    #[error("account id {0} already exists")]
    DuplicateAccountId(AccountId),

    /// No account with this id is registered.
    #[error("account with id={0} was not found")]
    AccountNotFound(AccountId),

    /// The operation id was already used by an earlier submission.
    #[error("operation {0} was already submitted")]
    DuplicateOperationId(OperationId),

    /// No operation with this id is recorded in history.
    #[error("operation {0} does not exist")]
    OperationNotFound(OperationId),

    /// A payment would drive the balance negative.
    #[error("insufficient funds on account {account}: balance {balance}, payment {amount}")]
    InsufficientFunds {
        account: AccountId,
        balance: i64,
        amount: i64,
    },

    /// The operation has no target account bound.
    #[error("operation {0} has no target account")]
    AccountNotSet(OperationId),

    /// The operation was applied to an account other than its bound target.
    #[error("operation {operation} targets account {target}, not account {account}")]
    TargetMismatch {
        operation: OperationId,
        target: AccountId,
        account: AccountId,
    },

    /// A percent accrual was undone before it was ever applied.
    #[error("percent was not accrued by operation {0}")]
    PercentNotAccrued(OperationId),

    /// The operation is not in a state that can be reverted.
    #[error("operation {operation} cannot be reverted from status {status}")]
    NotRevertible {
        operation: OperationId,
        status: OperationStatus,
    },

    /// Applying the operation would overflow the balance.
    #[error("balance of account {account} would overflow")]
    BalanceOverflow { account: AccountId },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl LedgerError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
