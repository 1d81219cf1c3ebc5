use serde::{Deserialize, Serialize};

use revledger_core::{AccountId, Entity};

use crate::report::AccountSummary;

/// A balance holder registered in a ledger.
///
/// The balance is only ever changed by executing or undoing an operation; there is no
/// public setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    display_name: String,
    balance: i64,
}

impl Account {
    /// New account with a zero balance.
    pub fn new(id: AccountId, display_name: impl Into<String>) -> Self {
        Self::with_balance(id, display_name, 0)
    }

    /// New account with an opening balance.
    pub fn with_balance(id: AccountId, display_name: impl Into<String>, balance: i64) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            balance,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Snapshot of this account for reporting.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            display_name: self.display_name.clone(),
            balance: self.balance,
        }
    }

    pub(crate) fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_starts_empty() {
        let account = Account::new(AccountId::new(91), "Account #1");
        assert_eq!(account.balance(), 0);
        assert_eq!(account.id(), AccountId::new(91));
    }

    #[test]
    fn summary_renders_report_line() {
        let account = Account::with_balance(AccountId::new(92), "Account #2", 60);
        let summary = account.summary();
        assert_eq!(summary.balance, 60);
        assert_eq!(
            summary.to_string(),
            "Account name: Account #2, balance: 60, id: 92"
        );
    }
}
