//! Operation lifecycle.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of an operation.
///
/// ```text
/// Waiting -> Processing -> Accepted -> Reverted
///                       \-> Cancelled
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationStatus {
    /// Built by the caller, not yet submitted.
    Waiting,
    /// Recorded in history and currently executing.
    Processing,
    /// Executed successfully.
    Accepted,
    /// Execution failed; kept in history as a permanent record.
    Cancelled,
    /// Undone after having been accepted.
    Reverted,
}

impl OperationStatus {
    /// Whether moving from `self` to `next` is a legal lifecycle step. Nothing leaves
    /// `Cancelled` or `Reverted`.
    pub fn can_transition_to(self, next: OperationStatus) -> bool {
        use OperationStatus::*;
        matches!(
            (self, next),
            (Waiting, Processing)
                | (Processing, Accepted)
                | (Processing, Cancelled)
                | (Accepted, Reverted)
        )
    }
}

impl core::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Waiting => "Waiting",
            Self::Processing => "Processing",
            Self::Accepted => "Accepted",
            Self::Cancelled => "Cancelled",
            Self::Reverted => "Reverted",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::OperationStatus::*;

    #[test]
    fn lifecycle_transitions() {
        assert!(Waiting.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Accepted));
        assert!(Processing.can_transition_to(Cancelled));
        assert!(Accepted.can_transition_to(Reverted));

        assert!(!Cancelled.can_transition_to(Reverted));
        assert!(!Reverted.can_transition_to(Reverted));
        assert!(!Reverted.can_transition_to(Accepted));
        assert!(!Waiting.can_transition_to(Accepted));
    }
}
