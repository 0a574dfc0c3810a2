use chrono::NaiveDate;

use crate::entities::{FeeAdjustments, MonthCategory, YearMonth};

/// Adjusted amount due for one billing month.
///
/// Past months with a penalty in effect collect base plus penalty; future
/// months with a discount in effect collect base minus discount (early-pay
/// incentive). The current month, or a month with no applicable adjustment,
/// collects the base fee unchanged.
///
/// The result is deliberately not clamped at zero: a discount larger than
/// the base fee yields a negative due.
pub fn adjusted_fee(
    base_fee: f64,
    adjustments: Option<&FeeAdjustments>,
    category: MonthCategory,
) -> f64 {
    let Some(adjustments) = adjustments else {
        return base_fee;
    };
    match category {
        MonthCategory::Past if adjustments.penalty.in_effect() => {
            base_fee + adjustments.penalty.value_against(base_fee)
        }
        MonthCategory::Future if adjustments.discount.in_effect() => {
            base_fee - adjustments.discount.value_against(base_fee)
        }
        _ => base_fee,
    }
}

/// Category of (year, month) relative to the injected as-of date.
pub fn month_category(year: i32, month: u32, as_of: NaiveDate) -> MonthCategory {
    YearMonth::new(year, month).category(as_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Adjustment;

    fn adj(penalty: Adjustment, discount: Adjustment) -> FeeAdjustments {
        FeeAdjustments { penalty, discount }
    }

    #[test]
    fn zero_adjustments_leave_base_unchanged_in_every_category() {
        let a = adj(Adjustment::none(), Adjustment::none());
        for category in [
            MonthCategory::Past,
            MonthCategory::Current,
            MonthCategory::Future,
        ] {
            assert_eq!(adjusted_fee(100.0, Some(&a), category), 100.0);
        }
    }

    #[test]
    fn no_policy_leaves_base_unchanged() {
        assert_eq!(adjusted_fee(75.0, None, MonthCategory::Past), 75.0);
    }

    #[test]
    fn past_month_adds_fixed_penalty() {
        let a = adj(Adjustment::fixed(15.0), Adjustment::none());
        assert_eq!(adjusted_fee(100.0, Some(&a), MonthCategory::Past), 115.0);
    }

    #[test]
    fn past_month_adds_percentage_penalty() {
        let a = adj(Adjustment::percentage(10.0), Adjustment::none());
        assert_eq!(adjusted_fee(100.0, Some(&a), MonthCategory::Past), 110.0);
    }

    #[test]
    fn future_month_subtracts_percentage_discount() {
        let a = adj(Adjustment::none(), Adjustment::percentage(20.0));
        assert_eq!(adjusted_fee(100.0, Some(&a), MonthCategory::Future), 80.0);
    }

    #[test]
    fn current_month_ignores_both_adjustments() {
        let a = adj(Adjustment::fixed(15.0), Adjustment::fixed(5.0));
        assert_eq!(adjusted_fee(100.0, Some(&a), MonthCategory::Current), 100.0);
    }

    #[test]
    fn penalty_does_not_apply_to_future_nor_discount_to_past() {
        let a = adj(Adjustment::fixed(15.0), Adjustment::fixed(5.0));
        assert_eq!(adjusted_fee(100.0, Some(&a), MonthCategory::Future), 95.0);
        assert_eq!(adjusted_fee(100.0, Some(&a), MonthCategory::Past), 115.0);
    }

    #[test]
    fn month_category_compares_at_month_granularity() {
        let as_of = chrono::NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        assert_eq!(month_category(2024, 8, as_of), MonthCategory::Current);
        assert_eq!(month_category(2024, 7, as_of), MonthCategory::Past);
        assert_eq!(month_category(2025, 1, as_of), MonthCategory::Future);
    }

    #[test]
    fn oversized_discount_goes_negative() {
        let a = adj(Adjustment::none(), Adjustment::fixed(130.0));
        assert_eq!(adjusted_fee(100.0, Some(&a), MonthCategory::Future), -30.0);
    }
}
