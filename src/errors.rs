use thiserror::Error;

use crate::entities::{CategoryId, OwnerId, PropertyId, UnitTypeId};

/// Error type for every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum LedgerError {
    // IO-related.
    #[error("error reading snapshot file '{path}': {source}")]
    SnapshotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error writing file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Parsing-related.
    #[error("invalid snapshot JSON: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
    #[error("invalid ISO date: '{date}'")]
    InvalidIsoDate { date: String },
    #[error("invalid money amount: '{value}'")]
    InvalidMoneyAmount { value: String },
    #[error("invalid payment status: '{value}'")]
    InvalidPaymentStatus { value: String },
    #[error("invalid adjustment kind: '{value}'")]
    InvalidAdjustmentKind { value: String },
    #[error("invalid ISO currency code: '{code}'")]
    InvalidCurrencyCode { code: String },
    #[error("month out of range: {month} (expected 1..=12)")]
    MonthOutOfRange { month: u32 },

    // Referential integrity of a loaded snapshot.
    #[error("unknown property: '{0}'")]
    UnknownProperty(PropertyId),
    #[error("unknown owner: '{0}'")]
    UnknownOwner(OwnerId),
    #[error("unknown unit type: '{0}'")]
    UnknownUnitType(UnitTypeId),
    #[error("unknown outcome category: '{0}'")]
    UnknownCategory(CategoryId),
    #[error("owner '{owner}' holds no unit in property '{property}'")]
    OwnerWithoutUnit {
        owner: OwnerId,
        property: PropertyId,
    },

    // Collection-related.
    #[error("payment amount must be positive, got {amount}")]
    NonPositivePayment { amount: f64 },
    #[error("no payment cell for owner '{owner}' in {year}-{month:02}")]
    PaymentNotFound {
        owner: OwnerId,
        year: i32,
        month: u32,
    },
    #[error("collection for owner '{owner}' in {year}-{month:02} is paused")]
    CellPaused {
        owner: OwnerId,
        year: i32,
        month: u32,
    },
    #[error("collection for owner '{owner}' in {year}-{month:02} is not paused")]
    CellNotPaused {
        owner: OwnerId,
        year: i32,
        month: u32,
    },

    // Outcome-related.
    #[error("outcome entry {index} is already confirmed")]
    OutcomeAlreadyConfirmed { index: usize },
    #[error("no outcome entry at index {index}")]
    OutcomeNotFound { index: usize },

    // Rendering.
    #[error("error writing CSV: {0}")]
    Csv(#[from] csv::Error),
}
