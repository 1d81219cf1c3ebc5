//! Point-in-time snapshots of a ledger.
//!
//! Reports are plain data (`Serialize`) so hosts can emit them as JSON; the
//! `Display` impls render the human-readable layout.

use serde::{Deserialize, Serialize};

use revledger_core::{AccountId, OperationId, OperationStatus};

/// Direction of a payment, derived from the sign of its amount.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentDirection {
    Income,
    Outcome,
}

impl PaymentDirection {
    /// Strictly positive amounts are income; zero and negative are outcome.
    pub fn of(amount: i64) -> Self {
        if amount > 0 { Self::Income } else { Self::Outcome }
    }
}

impl core::fmt::Display for PaymentDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Income => f.write_str("Income"),
            Self::Outcome => f.write_str("Outcome"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperationDetail {
    Payment {
        direction: PaymentDirection,
        /// Absolute magnitude of the payment.
        amount: u64,
    },
    PercentAccrual {
        percent: i64,
        applied_delta: Option<i64>,
    },
}

/// Description of one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSummary {
    pub id: OperationId,
    pub kind: String,
    pub status: OperationStatus,
    pub target: Option<AccountId>,
    pub detail: OperationDetail,
}

impl core::fmt::Display for OperationSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "\tOperationType: {}", self.kind)?;
        match &self.detail {
            OperationDetail::Payment { direction, amount } => {
                writeln!(f, "\tPayment type: {direction}")?;
                writeln!(f, "\tOperation Amount: {amount}")?;
            }
            OperationDetail::PercentAccrual { percent, .. } => {
                writeln!(f, "\tAccrual percent: {percent}%")?;
            }
        }
        writeln!(f, "\tStatus: {}", self.status)?;
        writeln!(f, "\tid: {}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub display_name: String,
    pub balance: i64,
}

impl core::fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Account name: {}, balance: {}, id: {}",
            self.display_name, self.balance, self.id
        )
    }
}

/// Snapshot of a whole ledger: operations in submission order, then accounts in
/// registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReport {
    pub name: String,
    pub operation_count: usize,
    pub account_count: usize,
    pub operations: Vec<OperationSummary>,
    pub accounts: Vec<AccountSummary>,
}

impl core::fmt::Display for LedgerReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Bank name: {}, Total transactions: {}, Total accounts: {}",
            self.name, self.operation_count, self.account_count
        )?;
        writeln!(f)?;
        for operation in &self.operations {
            writeln!(f, "{operation}")?;
        }
        for account in &self.accounts {
            writeln!(f, "{account}")?;
        }
        Ok(())
    }
}
