//! End-to-end ledger scenarios.
//!
//! Each test drives a `Ledger` only through its public API, the way a host program
//! would: register accounts, submit operations, revert some of them and inspect the
//! resulting balances, statuses and reports.

use revledger_ledger::{
    Account, AccountId, Ledger, LedgerError, Operation, OperationId, OperationStatus,
};

const FIRST: AccountId = AccountId::new(91);
const SECOND: AccountId = AccountId::new(92);

fn op(id: u64) -> OperationId {
    OperationId::new(id)
}

fn main_bank() -> Ledger {
    let mut ledger = Ledger::new("main bank");
    ledger
        .register_account(Account::new(FIRST, "Account #1"))
        .unwrap();
    ledger
        .register_account(Account::new(SECOND, "Account #2"))
        .unwrap();
    ledger
}

fn balance(ledger: &Ledger, id: AccountId) -> i64 {
    ledger.account(id).unwrap().balance()
}

fn status(ledger: &Ledger, id: u64) -> OperationStatus {
    ledger.operation(op(id)).unwrap().status()
}

#[test]
fn failed_withdrawal_then_revert_of_income() {
    let mut ledger = main_bank();

    ledger.submit(Operation::payment(op(10), FIRST, 50)).unwrap();
    assert_eq!(balance(&ledger, FIRST), 50);
    assert_eq!(status(&ledger, 10), OperationStatus::Accepted);

    let outcome = ledger.submit(Operation::payment(op(12), FIRST, -70)).unwrap();
    assert_eq!(outcome, OperationStatus::Cancelled);
    assert_eq!(balance(&ledger, FIRST), 50);

    ledger.revert(op(10)).unwrap();
    assert_eq!(balance(&ledger, FIRST), 0);
    assert_eq!(status(&ledger, 10), OperationStatus::Reverted);
    assert_eq!(status(&ledger, 12), OperationStatus::Cancelled);
}

#[test]
fn accrual_revert_uses_recorded_delta() {
    let mut ledger = main_bank();

    ledger.submit(Operation::payment(op(13), SECOND, 200)).unwrap();
    assert_eq!(balance(&ledger, SECOND), 200);

    ledger
        .submit(Operation::percent_accrual(op(21), SECOND, 5))
        .unwrap();
    assert_eq!(balance(&ledger, SECOND), 210);
    assert_eq!(
        ledger.operation(op(21)).unwrap().applied_delta(),
        Some(10)
    );

    ledger.submit(Operation::payment(op(14), SECOND, -150)).unwrap();
    assert_eq!(balance(&ledger, SECOND), 60);

    ledger.revert(op(21)).unwrap();
    assert_eq!(balance(&ledger, SECOND), 50);
    assert_eq!(status(&ledger, 21), OperationStatus::Reverted);
}

#[test]
fn reference_script_end_to_end() {
    let mut ledger = main_bank();

    ledger.submit(Operation::payment(op(10), FIRST, 50)).unwrap();
    ledger.submit(Operation::payment(op(11), SECOND, 100)).unwrap();
    ledger.submit(Operation::payment(op(12), FIRST, -70)).unwrap();
    ledger.revert(op(11)).unwrap();
    ledger.submit(Operation::payment(op(13), SECOND, 200)).unwrap();
    ledger
        .submit(Operation::percent_accrual(op(21), SECOND, 5))
        .unwrap();
    ledger.submit(Operation::payment(op(14), SECOND, -150)).unwrap();
    ledger.revert(op(21)).unwrap();

    assert_eq!(balance(&ledger, FIRST), 50);
    assert_eq!(balance(&ledger, SECOND), 50);

    let statuses: Vec<_> = ledger
        .operations()
        .iter()
        .map(|o| o.status())
        .collect();
    assert_eq!(
        statuses,
        vec![
            OperationStatus::Accepted,
            OperationStatus::Reverted,
            OperationStatus::Cancelled,
            OperationStatus::Accepted,
            OperationStatus::Reverted,
            OperationStatus::Accepted,
        ]
    );

    let report = ledger.report();
    assert_eq!(report.operation_count, 6);
    assert_eq!(report.account_count, 2);

    let text = report.to_string();
    assert!(text.starts_with("Bank name: main bank, Total transactions: 6, Total accounts: 2\n\n"));
    assert!(text.contains(
        "\tOperationType: Percent accrual\n\tAccrual percent: 5%\n\tStatus: Reverted\n\tid: 21\n"
    ));
    assert!(text.ends_with(
        "Account name: Account #1, balance: 50, id: 91\n\
         Account name: Account #2, balance: 50, id: 92\n"
    ));
}

#[test]
fn reused_ids_are_rejected_across_statuses() {
    let mut ledger = main_bank();
    ledger.submit(Operation::payment(op(10), FIRST, 50)).unwrap();
    ledger.submit(Operation::payment(op(12), FIRST, -70)).unwrap();
    ledger.revert(op(10)).unwrap();

    for id in [10, 12] {
        let err = ledger
            .submit(Operation::percent_accrual(op(id), SECOND, 5))
            .unwrap_err();
        assert_eq!(err, LedgerError::DuplicateOperationId(op(id)));
    }
    assert_eq!(ledger.operations().len(), 2);
    assert_eq!(balance(&ledger, SECOND), 0);
}

#[test]
fn report_is_a_pure_read() {
    let mut ledger = main_bank();
    ledger.submit(Operation::payment(op(10), FIRST, 50)).unwrap();

    let first = ledger.report();
    let second = ledger.report();
    assert_eq!(first, second);
    assert_eq!(balance(&ledger, FIRST), 50);
}
