use chrono::NaiveDate;
use tracing::debug;

use crate::{
    domain::logic::{collection_builder::CollectionBuilder, outcome_builder::OutcomeBuilder},
    entities::{
        IncomeMatrix, Ledger, OutcomeMatrix, OwnerBalance, OwnerId, PaymentHistoryEntry,
        PropertyId,
    },
    errors::LedgerError,
};

/// Read-side aggregation: matrices, balance summaries, audit trails. All
/// derived fresh from the ledger on each call.
pub trait ReportUsecase {
    fn income_matrix(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
    ) -> Result<IncomeMatrix, LedgerError>;

    fn outcome_matrix(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
    ) -> Result<OutcomeMatrix, LedgerError>;

    /// Yearly expected/paid/deficit per owner, sorted by largest deficit
    /// first.
    fn owner_balances(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
    ) -> Result<Vec<OwnerBalance>, LedgerError>;

    /// Audit trail for one owner-year, oldest entry first.
    fn audit_trail(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
    ) -> Result<Vec<PaymentHistoryEntry>, LedgerError>;
}

pub(crate) struct ReportUsecaseImpl;

impl ReportUsecaseImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ReportUsecase for ReportUsecaseImpl {
    fn income_matrix(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
    ) -> Result<IncomeMatrix, LedgerError> {
        let matrix = CollectionBuilder::new(ledger, year, as_of).build(property_id)?;
        debug!(
            property = %property_id,
            year,
            rows = matrix.rows.len(),
            "income matrix built"
        );
        Ok(matrix)
    }

    fn outcome_matrix(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
    ) -> Result<OutcomeMatrix, LedgerError> {
        OutcomeBuilder::new(ledger, year).build(property_id)
    }

    fn owner_balances(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
    ) -> Result<Vec<OwnerBalance>, LedgerError> {
        let matrix = self.income_matrix(ledger, property_id, year, as_of)?;
        let mut balances: Vec<OwnerBalance> = matrix
            .rows
            .into_iter()
            .map(|row| OwnerBalance {
                owner_id: row.owner_id,
                owner_name: row.owner_name,
                totals: row.totals,
            })
            .collect();
        balances.sort_by(|a, b| {
            b.totals
                .deficit()
                .partial_cmp(&a.totals.deficit())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.owner_name.cmp(&b.owner_name))
        });
        Ok(balances)
    }

    fn audit_trail(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
    ) -> Result<Vec<PaymentHistoryEntry>, LedgerError> {
        if ledger.property(property_id).is_none() {
            return Err(LedgerError::UnknownProperty(property_id.clone()));
        }
        if ledger.owner(owner_id).is_none() {
            return Err(LedgerError::UnknownOwner(owner_id.clone()));
        }
        let mut entries: Vec<PaymentHistoryEntry> = ledger
            .payment_history
            .iter()
            .filter(|h| {
                &h.property_id == property_id && &h.owner_id == owner_id && h.year == year
            })
            .cloned()
            .collect();
        entries.sort_by_key(|h| (h.recorded_on, h.month));
        Ok(entries)
    }
}
