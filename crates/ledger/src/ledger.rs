use revledger_core::{AccountId, Entity, LedgerError, LedgerResult, OperationId, OperationStatus};

use crate::account::Account;
use crate::operation::Operation;
use crate::report::LedgerReport;

/// Owner of the account registry and the append-only operation history.
///
/// - Account ids are unique within the registry; accounts are never removed.
/// - Operation ids are unique over the whole history, cancelled and reverted entries
///   included.
/// - History order is submission order, which is also execution order. Entries are
///   only ever status-transitioned, never removed.
///
/// All methods run to completion synchronously. Concurrent hosts must serialize
/// `submit` and `revert` per ledger (e.g. by wrapping it in a mutex).
#[derive(Debug, Default)]
pub struct Ledger {
    name: String,
    accounts: Vec<Account>,
    history: Vec<Operation>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add an account to the registry.
    pub fn register_account(&mut self, account: Account) -> LedgerResult<()> {
        let id = account.id();
        if self.accounts.iter().any(|a| a.id() == id) {
            return Err(LedgerError::DuplicateAccountId(id));
        }

        tracing::info!(
            account_id = %id,
            balance = account.balance(),
            "Registered account {}",
            account.display_name()
        );
        self.accounts.push(account);
        Ok(())
    }

    pub fn account(&self, id: AccountId) -> LedgerResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.id() == id)
            .ok_or(LedgerError::AccountNotFound(id))
    }

    /// Accounts in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn operation(&self, id: OperationId) -> LedgerResult<&Operation> {
        self.history
            .iter()
            .find(|op| op.id() == id)
            .ok_or(LedgerError::OperationNotFound(id))
    }

    /// Operations in submission order.
    pub fn operations(&self) -> &[Operation] {
        &self.history
    }

    pub fn contains_operation(&self, id: OperationId) -> bool {
        self.history.iter().any(|op| op.id() == id)
    }

    /// Record `operation` in history and execute it.
    ///
    /// Only a reused operation id is raised, and in that case nothing is recorded.
    /// Any failure during execution is absorbed: the operation stays in history as
    /// `Cancelled` and the returned status says so.
    pub fn submit(&mut self, mut operation: Operation) -> LedgerResult<OperationStatus> {
        let id = operation.id();
        if self.contains_operation(id) {
            tracing::warn!(operation_id = %id, "Rejected operation: id already used");
            return Err(LedgerError::DuplicateOperationId(id));
        }

        operation.set_status(OperationStatus::Processing);
        self.history.push(operation);
        let index = self.history.len() - 1;
        let operation = &mut self.history[index];

        let outcome = target_account_mut(&mut self.accounts, operation)
            .and_then(|account| operation.execute(account).map(|()| account.balance()));

        match outcome {
            Ok(balance) => {
                operation.set_status(OperationStatus::Accepted);
                tracing::info!(
                    operation_id = %id,
                    account_id = ?operation.target(),
                    kind = operation.kind().label(),
                    status = %operation.status(),
                    balance,
                    "Operation accepted"
                );
            }
            Err(err) => {
                operation.set_status(OperationStatus::Cancelled);
                tracing::warn!(
                    operation_id = %id,
                    account_id = ?operation.target(),
                    status = %operation.status(),
                    error = %err,
                    "Operation cancelled"
                );
            }
        }

        Ok(operation.status())
    }

    /// Undo a previously accepted operation and mark it `Reverted`.
    ///
    /// Only `Accepted` operations can be reverted; cancelled operations never touched
    /// a balance and reverted ones have nothing left to undo. Undo failures are
    /// propagated and leave the operation `Accepted`.
    pub fn revert(&mut self, id: OperationId) -> LedgerResult<()> {
        let operation = self
            .history
            .iter_mut()
            .find(|op| op.id() == id)
            .ok_or(LedgerError::OperationNotFound(id))?;

        if !operation.status().can_transition_to(OperationStatus::Reverted) {
            return Err(LedgerError::NotRevertible {
                operation: id,
                status: operation.status(),
            });
        }

        let account = target_account_mut(&mut self.accounts, operation)?;
        operation.undo(account)?;
        operation.set_status(OperationStatus::Reverted);

        tracing::info!(
            operation_id = %id,
            account_id = %account.id(),
            status = %operation.status(),
            balance = account.balance(),
            "Operation reverted"
        );
        Ok(())
    }

    /// Snapshot of the ledger. Pure read.
    pub fn report(&self) -> LedgerReport {
        LedgerReport {
            name: self.name.clone(),
            operation_count: self.history.len(),
            account_count: self.accounts.len(),
            operations: self.history.iter().map(Operation::describe).collect(),
            accounts: self.accounts.iter().map(Account::summary).collect(),
        }
    }
}

fn target_account_mut<'a>(
    accounts: &'a mut [Account],
    operation: &Operation,
) -> LedgerResult<&'a mut Account> {
    let target = operation
        .target()
        .ok_or(LedgerError::AccountNotSet(operation.id()))?;
    accounts
        .iter_mut()
        .find(|a| a.id() == target)
        .ok_or(LedgerError::AccountNotFound(target))
}
