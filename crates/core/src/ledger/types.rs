//! Payment domain types for the withdrawal ledger.

use chrono::{DateTime, Utc};
use crewline_shared::{PaymentId, WorkerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status in the withdrawal lifecycle.
///
/// A withdrawal payment is created `Pending` (with the amount already
/// reserved out of the worker's balance) and settles exactly once:
/// - Pending → Completed (admin approve; balance untouched)
/// - Pending → Failed (admin reject; amount refunded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Awaiting an admin decision.
    Pending,
    /// Approved and paid out.
    Completed,
    /// Rejected; the reserved amount was refunded.
    Failed,
}

impl PaymentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Returns true if the payment has reached a settled state.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of payment record.
///
/// Only withdrawals are operated on here; earning rows appear in payment
/// history but are written by out-of-scope flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Balance payout requested by the worker.
    Withdrawal,
    /// Balance credit earned from reviewed work.
    Earning,
}

impl PaymentType {
    /// Returns the string representation of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Withdrawal => "withdrawal",
            Self::Earning => "earning",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment record on a worker's account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment ID.
    pub id: PaymentId,
    /// The worker the payment belongs to.
    pub worker_id: WorkerId,
    /// Withdrawal or earning.
    pub payment_type: PaymentType,
    /// Amount, strictly positive.
    pub amount: Decimal,
    /// Current settlement status.
    pub status: PaymentStatus,
    /// When the payment was created.
    pub created_at: DateTime<Utc>,
    /// When the payment settled to `Completed`, if it has.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Payment {
    /// Creates a pending withdrawal payment for a reserved amount.
    #[must_use]
    pub fn withdrawal(worker_id: WorkerId, amount: Decimal, created_at: DateTime<Utc>) -> Self {
        Self {
            id: PaymentId::new(),
            worker_id,
            payment_type: PaymentType::Withdrawal,
            amount,
            status: PaymentStatus::Pending,
            created_at,
            completed_at: None,
        }
    }

    /// Returns true if this is a withdrawal still awaiting a decision.
    #[must_use]
    pub fn is_pending_withdrawal(&self) -> bool {
        self.payment_type == PaymentType::Withdrawal && self.status == PaymentStatus::Pending
    }
}

/// A validated withdrawal reservation.
///
/// Produced by the ledger reserve rule. The storage layer must apply the
/// balance debit and the pending payment insert as one write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    /// The amount leaving the balance.
    pub amount: Decimal,
    /// The worker balance after the debit.
    pub balance_after: Decimal,
}

/// How a pending payment leaves the pending state.
///
/// Produced by the ledger decision rules and applied by the storage layer
/// in a single conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Settle the payment as completed. Balance is untouched.
    Complete {
        /// When the payment completed.
        completed_at: DateTime<Utc>,
    },
    /// Fail the payment and refund the reserved amount.
    FailAndRefund {
        /// The amount returning to the balance.
        amount: Decimal,
    },
}

impl Settlement {
    /// Returns the payment status this settlement produces.
    #[must_use]
    pub const fn new_status(&self) -> PaymentStatus {
        match self {
            Self::Complete { .. } => PaymentStatus::Completed,
            Self::FailAndRefund { .. } => PaymentStatus::Failed,
        }
    }
}
