//! Scripted walk through the ledger: the steps a host program issues, in order.

use anyhow::Context;

use revledger_ledger::{
    Account, AccountId, Entity, Ledger, LedgerReport, Operation, OperationId, OperationStatus,
};

#[derive(Debug)]
pub enum Step {
    Register(Account),
    Submit(Operation),
    Revert(OperationId),
    Report,
}

/// Two accounts, a cancelled overdraft, a 5% accrual and two reversions.
pub fn reference_script() -> Vec<Step> {
    let first = AccountId::new(91);
    let second = AccountId::new(92);
    let op = OperationId::new;

    vec![
        Step::Register(Account::new(first, "Account #1")),
        Step::Register(Account::new(second, "Account #2")),
        Step::Submit(Operation::payment(op(10), first, 50)),
        Step::Submit(Operation::payment(op(11), second, 100)),
        Step::Report,
        // 50 on the first account; withdrawing 70 is cancelled.
        Step::Submit(Operation::payment(op(12), first, -70)),
        Step::Report,
        Step::Revert(op(11)),
        Step::Report,
        Step::Submit(Operation::payment(op(13), second, 200)),
        Step::Submit(Operation::percent_accrual(op(21), second, 5)),
        Step::Report,
        Step::Submit(Operation::payment(op(14), second, -150)),
        Step::Revert(op(21)),
        Step::Report,
    ]
}

/// Apply `steps` to `ledger`, handing every requested snapshot to `on_report`.
///
/// Cancelled submissions are logged and the script continues; any raised ledger
/// error stops it.
pub fn replay(
    ledger: &mut Ledger,
    steps: Vec<Step>,
    mut on_report: impl FnMut(&LedgerReport) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    for step in steps {
        match step {
            Step::Register(account) => {
                let id = account.id();
                ledger
                    .register_account(account)
                    .with_context(|| format!("registering account {id}"))?;
            }
            Step::Submit(operation) => {
                let id = operation.id();
                let status = ledger
                    .submit(operation)
                    .with_context(|| format!("submitting operation {id}"))?;
                if status == OperationStatus::Cancelled {
                    tracing::warn!(operation_id = %id, %status, "Submitted operation cancelled");
                }
            }
            Step::Revert(id) => {
                ledger
                    .revert(id)
                    .with_context(|| format!("reverting operation {id}"))?;
            }
            Step::Report => on_report(&ledger.report())?,
        }
    }
    Ok(())
}
