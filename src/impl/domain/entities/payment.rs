use chrono::NaiveDate;

use super::ids::{OwnerId, PropertyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
    /// Collection suspended for the cell. Orthogonal to amounts: pausing and
    /// resuming never change `amount_paid`.
    Paused,
}

/// The collection cell for one owner in one billing month.
#[derive(Debug, Clone)]
pub struct MonthlyPayment {
    pub property_id: PropertyId,
    pub owner_id: OwnerId,
    pub year: i32,
    pub month: u32,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub status: PaymentStatus,
}

/// Append-only audit record written on every successful payment recording.
/// Entries are never mutated or deleted.
#[derive(Debug, Clone)]
pub struct PaymentHistoryEntry {
    pub property_id: PropertyId,
    pub owner_id: OwnerId,
    pub year: i32,
    pub month: u32,
    pub previous_amount: f64,
    pub new_amount: f64,
    pub recorded_on: NaiveDate,
    pub note: Option<String>,
}

/// Outcome of one successful payment recording, mirroring what was written
/// to the cell and the audit trail.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub owner_id: OwnerId,
    pub year: i32,
    pub month: u32,
    pub previous_amount: f64,
    pub new_amount: f64,
    pub status: PaymentStatus,
}

// --

impl MonthlyPayment {
    pub fn open(
        property_id: PropertyId,
        owner_id: OwnerId,
        year: i32,
        month: u32,
        amount_due: f64,
    ) -> Self {
        Self {
            property_id,
            owner_id,
            year,
            month,
            amount_due,
            amount_paid: 0.0,
            status: PaymentStatus::Unpaid,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.amount_due - self.amount_paid
    }
}
