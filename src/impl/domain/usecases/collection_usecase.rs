use chrono::NaiveDate;
use tracing::debug;

use crate::{
    domain::logic::{fee_calculator::adjusted_fee, payment_processor},
    entities::{
        checked_month, FeePolicy, Ledger, MonthlyOutcome, MonthlyPayment, OwnerId,
        PaymentHistoryEntry, PaymentReceipt, PropertyId, YearMonth,
    },
    errors::LedgerError,
};

/// Mutating operations: payment recording, cell suspension, outcome drafts,
/// fee schedule saves. Every method takes the ledger explicitly; nothing is
/// cached between calls.
pub trait CollectionUsecase {
    /// Records a payment against an owner-month cell, creating the cell with
    /// its adjusted due on first touch. Appends one audit trail entry.
    #[allow(clippy::too_many_arguments)]
    fn record_payment(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        amount: f64,
        as_of: NaiveDate,
        note: Option<String>,
    ) -> Result<PaymentReceipt, LedgerError>;

    fn pause_cell(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        as_of: NaiveDate,
    ) -> Result<(), LedgerError>;

    fn resume_cell(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
    ) -> Result<(), LedgerError>;

    /// Overrides a cell's due amount, creating the cell on first touch.
    #[allow(clippy::too_many_arguments)]
    fn set_amount_due(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        amount_due: f64,
        as_of: NaiveDate,
    ) -> Result<(), LedgerError>;

    /// Adds an outcome entry (draft or confirmed); returns its index.
    fn add_outcome(
        &self,
        ledger: &mut Ledger,
        outcome: MonthlyOutcome,
    ) -> Result<usize, LedgerError>;

    fn confirm_outcome(&self, ledger: &mut Ledger, index: usize) -> Result<(), LedgerError>;

    /// Discards a draft. Confirmed entries cannot be voided.
    fn void_outcome(&self, ledger: &mut Ledger, index: usize) -> Result<(), LedgerError>;

    /// Saves a fee schedule, replacing any existing policy for the same
    /// (property, unit type, year) whole.
    fn save_fee_policy(&self, ledger: &mut Ledger, policy: FeePolicy) -> Result<(), LedgerError>;
}

pub(crate) struct CollectionUsecaseImpl;

impl CollectionUsecaseImpl {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Index of the cell, creating it with its adjusted due if absent.
    fn ensure_cell(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        as_of: NaiveDate,
    ) -> Result<usize, LedgerError> {
        let month = checked_month(month)?;
        if let Some(index) = ledger.payments.iter().position(|p| {
            &p.property_id == property_id
                && &p.owner_id == owner_id
                && p.year == year
                && p.month == month
        }) {
            return Ok(index);
        }

        if ledger.property(property_id).is_none() {
            return Err(LedgerError::UnknownProperty(property_id.clone()));
        }
        if ledger.owner(owner_id).is_none() {
            return Err(LedgerError::UnknownOwner(owner_id.clone()));
        }
        let unit_type_id = ledger.billed_unit_type(owner_id).cloned().ok_or_else(|| {
            LedgerError::OwnerWithoutUnit {
                owner: owner_id.clone(),
                property: property_id.clone(),
            }
        })?;

        let category = YearMonth::new(year, month).category(as_of);
        let amount_due = ledger
            .policy_for(property_id, &unit_type_id, year)
            .map(|p| adjusted_fee(p.base_fee, Some(&p.adjustments), category))
            .unwrap_or(0.0);

        ledger.payments.push(MonthlyPayment::open(
            property_id.clone(),
            owner_id.clone(),
            year,
            month,
            amount_due,
        ));
        Ok(ledger.payments.len() - 1)
    }
}

impl CollectionUsecase for CollectionUsecaseImpl {
    fn record_payment(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        amount: f64,
        as_of: NaiveDate,
        note: Option<String>,
    ) -> Result<PaymentReceipt, LedgerError> {
        let index = self.ensure_cell(ledger, property_id, owner_id, year, month, as_of)?;
        let delta = payment_processor::record(&mut ledger.payments[index], amount)?;
        let cell = &ledger.payments[index];
        let receipt = PaymentReceipt {
            owner_id: owner_id.clone(),
            year,
            month,
            previous_amount: delta.previous_amount,
            new_amount: delta.new_amount,
            status: cell.status,
        };

        ledger.payment_history.push(PaymentHistoryEntry {
            property_id: property_id.clone(),
            owner_id: owner_id.clone(),
            year,
            month,
            previous_amount: delta.previous_amount,
            new_amount: delta.new_amount,
            recorded_on: as_of,
            note,
        });
        debug!(
            owner = %owner_id,
            year,
            month,
            previous = delta.previous_amount,
            new = delta.new_amount,
            "payment recorded"
        );
        Ok(receipt)
    }

    fn pause_cell(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        as_of: NaiveDate,
    ) -> Result<(), LedgerError> {
        let index = self.ensure_cell(ledger, property_id, owner_id, year, month, as_of)?;
        payment_processor::pause(&mut ledger.payments[index]);
        debug!(owner = %owner_id, year, month, "collection paused");
        Ok(())
    }

    fn resume_cell(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
    ) -> Result<(), LedgerError> {
        let month = checked_month(month)?;
        let payment = ledger
            .payment_mut(property_id, owner_id, year, month)
            .ok_or_else(|| LedgerError::PaymentNotFound {
                owner: owner_id.clone(),
                year,
                month,
            })?;
        payment_processor::resume(payment)?;
        debug!(owner = %owner_id, year, month, "collection resumed");
        Ok(())
    }

    fn set_amount_due(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        amount_due: f64,
        as_of: NaiveDate,
    ) -> Result<(), LedgerError> {
        let index = self.ensure_cell(ledger, property_id, owner_id, year, month, as_of)?;
        payment_processor::set_due(&mut ledger.payments[index], amount_due);
        debug!(owner = %owner_id, year, month, amount_due, "due amount overridden");
        Ok(())
    }

    fn add_outcome(
        &self,
        ledger: &mut Ledger,
        outcome: MonthlyOutcome,
    ) -> Result<usize, LedgerError> {
        checked_month(outcome.month)?;
        if ledger.property(&outcome.property_id).is_none() {
            return Err(LedgerError::UnknownProperty(outcome.property_id.clone()));
        }
        if ledger.category(&outcome.category_id).is_none() {
            return Err(LedgerError::UnknownCategory(outcome.category_id.clone()));
        }
        ledger.outcomes.push(outcome);
        Ok(ledger.outcomes.len() - 1)
    }

    fn confirm_outcome(&self, ledger: &mut Ledger, index: usize) -> Result<(), LedgerError> {
        let outcome = ledger
            .outcomes
            .get_mut(index)
            .ok_or(LedgerError::OutcomeNotFound { index })?;
        if outcome.confirmed {
            return Err(LedgerError::OutcomeAlreadyConfirmed { index });
        }
        outcome.confirmed = true;
        Ok(())
    }

    fn void_outcome(&self, ledger: &mut Ledger, index: usize) -> Result<(), LedgerError> {
        let outcome = ledger
            .outcomes
            .get(index)
            .ok_or(LedgerError::OutcomeNotFound { index })?;
        if outcome.confirmed {
            return Err(LedgerError::OutcomeAlreadyConfirmed { index });
        }
        ledger.outcomes.remove(index);
        Ok(())
    }

    fn save_fee_policy(&self, ledger: &mut Ledger, policy: FeePolicy) -> Result<(), LedgerError> {
        if ledger.property(&policy.property_id).is_none() {
            return Err(LedgerError::UnknownProperty(policy.property_id.clone()));
        }
        if ledger.unit_type(&policy.unit_type_id).is_none() {
            return Err(LedgerError::UnknownUnitType(policy.unit_type_id.clone()));
        }
        ledger.fee_policies.retain(|p| {
            !(p.property_id == policy.property_id
                && p.unit_type_id == policy.unit_type_id
                && p.year == policy.year)
        });
        ledger.fee_policies.push(policy);
        Ok(())
    }
}
