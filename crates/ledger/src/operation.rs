//! Reversible operations over a single account.
//!
//! An [`Operation`] is the unit of work submitted to a [`Ledger`](crate::Ledger): it
//! carries its own identity, lifecycle status and whatever state it needs to undo
//! itself exactly. Status transitions are driven by the ledger; the operation only
//! knows how to apply and reverse its effect on an account.

use revledger_core::{AccountId, Entity, LedgerError, LedgerResult, OperationId, OperationStatus};

use crate::account::Account;
use crate::report::{OperationDetail, OperationSummary, PaymentDirection};

/// Variant-specific payload of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    /// Adds a fixed signed amount to the balance.
    Payment { amount: i64 },

    /// Grows (or shrinks) the balance by a percentage of itself.
    ///
    /// `applied_delta` is the exact amount added by the last successful execution and
    /// is cleared again by undo.
    PercentAccrual {
        percent: i64,
        applied_delta: Option<i64>,
    },
}

impl OperationKind {
    /// Human-readable operation kind.
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::Payment { .. } => "Payment",
            OperationKind::PercentAccrual { .. } => "Percent accrual",
        }
    }
}

/// A uniquely identified, reversible mutation of one account.
#[derive(Debug, PartialEq, Eq)]
pub struct Operation {
    id: OperationId,
    status: OperationStatus,
    target: Option<AccountId>,
    kind: OperationKind,
}

impl Operation {
    /// Unbound operation in status `Waiting`; bind it with [`Operation::with_target`].
    pub fn new(id: OperationId, kind: OperationKind) -> Self {
        Self {
            id,
            status: OperationStatus::Waiting,
            target: None,
            kind,
        }
    }

    pub fn payment(id: OperationId, target: AccountId, amount: i64) -> Self {
        Self::new(id, OperationKind::Payment { amount }).with_target(target)
    }

    pub fn percent_accrual(id: OperationId, target: AccountId, percent: i64) -> Self {
        Self::new(
            id,
            OperationKind::PercentAccrual {
                percent,
                applied_delta: None,
            },
        )
        .with_target(target)
    }

    pub fn with_target(mut self, target: AccountId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn target(&self) -> Option<AccountId> {
        self.target
    }

    pub fn kind(&self) -> &OperationKind {
        &self.kind
    }

    /// Exact balance change recorded by a successful percent accrual that has not been
    /// undone. Always `None` for payments.
    pub fn applied_delta(&self) -> Option<i64> {
        match self.kind {
            OperationKind::PercentAccrual { applied_delta, .. } => applied_delta,
            OperationKind::Payment { .. } => None,
        }
    }

    pub(crate) fn set_status(&mut self, next: OperationStatus) {
        debug_assert!(
            self.status.can_transition_to(next),
            "illegal status transition {} -> {}",
            self.status,
            next
        );
        self.status = next;
    }

    /// `account` must be the one this operation is bound to.
    fn check_target(&self, account: &Account) -> LedgerResult<()> {
        let target = self.target.ok_or(LedgerError::AccountNotSet(self.id))?;
        if account.id() != target {
            return Err(LedgerError::TargetMismatch {
                operation: self.id,
                target,
                account: account.id(),
            });
        }
        Ok(())
    }

    /// Apply the operation to `account`, which must be its bound target.
    ///
    /// On error the account is left untouched.
    pub fn execute(&mut self, account: &mut Account) -> LedgerResult<()> {
        self.check_target(account)?;
        let balance = account.balance();
        let account_id = account.id();

        match &mut self.kind {
            OperationKind::Payment { amount } => {
                let amount = *amount;
                let result = balance
                    .checked_add(amount)
                    .ok_or(LedgerError::BalanceOverflow {
                        account: account_id,
                    })?;
                if result < 0 {
                    return Err(LedgerError::InsufficientFunds {
                        account: account_id,
                        balance,
                        amount,
                    });
                }
                account.set_balance(result);
            }
            OperationKind::PercentAccrual {
                percent,
                applied_delta,
            } => {
                // Accruals are never rejected for driving the balance negative.
                let new_balance = accrue(balance, *percent).ok_or(LedgerError::BalanceOverflow {
                    account: account_id,
                })?;
                let delta = new_balance
                    .checked_sub(balance)
                    .ok_or(LedgerError::BalanceOverflow {
                        account: account_id,
                    })?;
                *applied_delta = Some(delta);
                account.set_balance(new_balance);
            }
        }

        Ok(())
    }

    /// Reverse the effect of a previous [`Operation::execute`] on `account`, which must
    /// be its bound target.
    ///
    /// Payments subtract their amount without a funds check. Accruals subtract the
    /// recorded delta, never a recomputed percentage.
    pub fn undo(&mut self, account: &mut Account) -> LedgerResult<()> {
        self.check_target(account)?;
        let balance = account.balance();
        let overflow = LedgerError::BalanceOverflow {
            account: account.id(),
        };

        match &mut self.kind {
            OperationKind::Payment { amount } => {
                let result = balance.checked_sub(*amount).ok_or(overflow)?;
                account.set_balance(result);
            }
            OperationKind::PercentAccrual { applied_delta, .. } => {
                let delta = (*applied_delta).ok_or(LedgerError::PercentNotAccrued(self.id))?;
                let result = balance.checked_sub(delta).ok_or(overflow)?;
                account.set_balance(result);
                *applied_delta = None;
            }
        }

        Ok(())
    }

    /// Snapshot of this operation for reporting.
    pub fn describe(&self) -> OperationSummary {
        let detail = match self.kind {
            OperationKind::Payment { amount } => OperationDetail::Payment {
                direction: PaymentDirection::of(amount),
                amount: amount.unsigned_abs(),
            },
            OperationKind::PercentAccrual {
                percent,
                applied_delta,
            } => OperationDetail::PercentAccrual {
                percent,
                applied_delta,
            },
        };

        OperationSummary {
            id: self.id,
            kind: self.kind.label().to_string(),
            status: self.status,
            target: self.target,
            detail,
        }
    }
}

impl Entity for Operation {
    type Id = OperationId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// `balance * (percent + 100) / 100`, truncated toward zero.
///
/// Widened to `i128` so the intermediate product cannot overflow; `None` when the
/// result does not fit back into an `i64`.
fn accrue(balance: i64, percent: i64) -> Option<i64> {
    let factor = i128::from(percent) + 100;
    let scaled = i128::from(balance) * factor / 100;
    i64::try_from(scaled).ok()
}
