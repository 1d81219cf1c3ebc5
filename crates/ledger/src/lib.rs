//! Reversible-operation ledger.
//!
//! Pure domain logic only: no IO, no persistence concerns. Accounts live in a
//! [`Ledger`], operations are submitted to it, and every submission stays in an
//! append-only history from which it can later be reverted by id.

pub mod account;
pub mod ledger;
pub mod operation;
pub mod report;

pub use account::Account;
pub use ledger::Ledger;
pub use operation::{Operation, OperationKind};
pub use report::{
    AccountSummary, LedgerReport, OperationDetail, OperationSummary, PaymentDirection,
};

pub use revledger_core::{
    AccountId, Entity, LedgerError, LedgerResult, OperationId, OperationStatus,
};
