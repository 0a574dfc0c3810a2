use crate::{
    entities::{MonthlyPayment, PaymentStatus},
    errors::LedgerError,
};

/// Amounts before and after one recording, as written to the audit trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PaymentDelta {
    pub previous_amount: f64,
    pub new_amount: f64,
}

/// Applies a payment of `amount` to the cell. The applied amount is capped
/// at the remaining balance, so `amount_paid` never exceeds `amount_due`.
/// Status moves to `Paid` once the full due is covered, `PartiallyPaid`
/// otherwise. Paused cells reject recordings until resumed.
pub(crate) fn record(
    payment: &mut MonthlyPayment,
    amount: f64,
) -> Result<PaymentDelta, LedgerError> {
    if amount <= 0.0 {
        return Err(LedgerError::NonPositivePayment { amount });
    }
    if payment.status == PaymentStatus::Paused {
        return Err(LedgerError::CellPaused {
            owner: payment.owner_id.clone(),
            year: payment.year,
            month: payment.month,
        });
    }

    let previous_amount = payment.amount_paid;
    let applied = amount.min(payment.remaining());
    payment.amount_paid += applied;
    payment.status = if payment.amount_paid >= payment.amount_due {
        PaymentStatus::Paid
    } else {
        PaymentStatus::PartiallyPaid
    };

    Ok(PaymentDelta {
        previous_amount,
        new_amount: payment.amount_paid,
    })
}

/// Overrides the cell's due amount (e.g. after a fee schedule correction)
/// and re-derives the status from the amounts. A paused cell stays paused.
pub(crate) fn set_due(payment: &mut MonthlyPayment, amount_due: f64) {
    payment.amount_due = amount_due;
    if payment.status == PaymentStatus::Paused {
        return;
    }
    payment.status = if payment.amount_paid <= 0.0 {
        PaymentStatus::Unpaid
    } else if payment.amount_paid >= amount_due {
        PaymentStatus::Paid
    } else {
        PaymentStatus::PartiallyPaid
    };
}

/// Suspends collection for the cell regardless of amounts already paid.
pub(crate) fn pause(payment: &mut MonthlyPayment) {
    payment.status = PaymentStatus::Paused;
}

/// Lifts a suspension. The cell reverts to `Unpaid`; recorded amounts are
/// kept untouched.
pub(crate) fn resume(payment: &mut MonthlyPayment) -> Result<(), LedgerError> {
    if payment.status != PaymentStatus::Paused {
        return Err(LedgerError::CellNotPaused {
            owner: payment.owner_id.clone(),
            year: payment.year,
            month: payment.month,
        });
    }
    payment.status = PaymentStatus::Unpaid;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{owner_id, property_id};

    fn cell(due: f64) -> MonthlyPayment {
        MonthlyPayment::open(property_id("p1"), owner_id("o1"), 2024, 3, due)
    }

    #[test]
    fn partial_payment_accumulates_and_marks_partially_paid() {
        let mut payment = cell(110.0);
        let delta = record(&mut payment, 50.0).unwrap();
        assert_eq!(delta.previous_amount, 0.0);
        assert_eq!(delta.new_amount, 50.0);
        assert_eq!(payment.status, PaymentStatus::PartiallyPaid);

        record(&mut payment, 30.0).unwrap();
        assert_eq!(payment.amount_paid, 80.0);
        assert_eq!(payment.status, PaymentStatus::PartiallyPaid);
    }

    #[test]
    fn paying_the_remaining_balance_marks_paid() {
        let mut payment = cell(110.0);
        record(&mut payment, 50.0).unwrap();
        record(&mut payment, 60.0).unwrap();
        assert_eq!(payment.amount_paid, 110.0);
        assert_eq!(payment.status, PaymentStatus::Paid);
    }

    #[test]
    fn overpayment_is_capped_at_the_remaining_balance() {
        let mut payment = cell(100.0);
        let delta = record(&mut payment, 250.0).unwrap();
        assert_eq!(delta.new_amount, 100.0);
        assert_eq!(payment.status, PaymentStatus::Paid);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut payment = cell(100.0);
        assert!(matches!(
            record(&mut payment, 0.0),
            Err(LedgerError::NonPositivePayment { .. })
        ));
        assert!(matches!(
            record(&mut payment, -5.0),
            Err(LedgerError::NonPositivePayment { .. })
        ));
    }

    #[test]
    fn paused_cell_rejects_recording_and_keeps_amounts_on_resume() {
        let mut payment = cell(100.0);
        record(&mut payment, 40.0).unwrap();

        pause(&mut payment);
        assert_eq!(payment.status, PaymentStatus::Paused);
        assert!(matches!(
            record(&mut payment, 10.0),
            Err(LedgerError::CellPaused { .. })
        ));

        resume(&mut payment).unwrap();
        assert_eq!(payment.status, PaymentStatus::Unpaid);
        assert_eq!(payment.amount_paid, 40.0);
    }

    #[test]
    fn overriding_the_due_re_derives_the_status() {
        let mut payment = cell(100.0);
        record(&mut payment, 80.0).unwrap();
        assert_eq!(payment.status, PaymentStatus::PartiallyPaid);

        set_due(&mut payment, 80.0);
        assert_eq!(payment.status, PaymentStatus::Paid);

        set_due(&mut payment, 120.0);
        assert_eq!(payment.status, PaymentStatus::PartiallyPaid);
    }

    #[test]
    fn due_override_leaves_paused_cells_paused() {
        let mut payment = cell(100.0);
        pause(&mut payment);
        set_due(&mut payment, 50.0);
        assert_eq!(payment.status, PaymentStatus::Paused);
        assert_eq!(payment.amount_due, 50.0);
    }

    #[test]
    fn resuming_an_unpaused_cell_is_an_error() {
        let mut payment = cell(100.0);
        assert!(matches!(
            resume(&mut payment),
            Err(LedgerError::CellNotPaused { .. })
        ));
    }
}
