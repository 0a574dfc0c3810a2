use chrono::NaiveDate;

use crate::{
    entities::{
        CollectionTotals, IncomeCell, IncomeMatrix, IncomeRow, Ledger, Owner, PaymentStatus,
        Property, PropertyId, YearMonth,
    },
    errors::LedgerError,
};

use super::fee_calculator::adjusted_fee;

/// Builds the owner-by-month income matrix for one property year.
pub(crate) struct CollectionBuilder<'a> {
    ledger: &'a Ledger,
    year: i32,
    as_of: NaiveDate,
}

/// Running column/grand totals while rows are folded in.
struct TotalsFold {
    month_totals: Vec<CollectionTotals>,
    grand: CollectionTotals,
}

impl TotalsFold {
    fn new() -> Self {
        Self {
            month_totals: vec![CollectionTotals::default(); 12],
            grand: CollectionTotals::default(),
        }
    }

    fn step(mut self, row: &IncomeRow) -> Self {
        for cell in row.cells.iter().filter(|c| c.active) {
            let delta = CollectionTotals {
                expected: cell.expected,
                paid: cell.paid,
            };
            self.month_totals[cell.month as usize - 1].add(delta);
            self.grand.add(delta);
        }
        self
    }
}

impl<'a> CollectionBuilder<'a> {
    pub(crate) fn new(ledger: &'a Ledger, year: i32, as_of: NaiveDate) -> Self {
        Self {
            ledger,
            year,
            as_of,
        }
    }

    pub(crate) fn build(&self, property_id: &PropertyId) -> Result<IncomeMatrix, LedgerError> {
        let property = self
            .ledger
            .property(property_id)
            .ok_or_else(|| LedgerError::UnknownProperty(property_id.clone()))?;

        let mut owners = self.ledger.eligible_owners(property_id, self.year);
        owners.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        let rows: Vec<IncomeRow> = owners
            .iter()
            .map(|owner| self.build_row(property, owner))
            .collect();

        let totals = rows.iter().fold(TotalsFold::new(), TotalsFold::step);

        Ok(IncomeMatrix {
            property_id: property_id.clone(),
            year: self.year,
            rows,
            month_totals: totals.month_totals,
            grand: totals.grand,
        })
    }

    fn build_row(&self, property: &Property, owner: &Owner) -> IncomeRow {
        // An owner without a unit (or a year without a saved fee schedule)
        // is carried with zero expected amounts rather than dropped.
        let policy = self
            .ledger
            .billed_unit_type(&owner.id)
            .and_then(|t| self.ledger.policy_for(&property.id, t, self.year));

        let construction = YearMonth::of(property.construction_date);
        let joined = YearMonth::of(owner.join_date);

        let cells: Vec<IncomeCell> = (1..=12)
            .map(|month| {
                let ym = YearMonth::new(self.year, month);
                let category = ym.category(self.as_of);
                if construction > ym || joined > ym {
                    return IncomeCell {
                        month,
                        active: false,
                        category,
                        expected: 0.0,
                        paid: 0.0,
                        status: PaymentStatus::Unpaid,
                    };
                }

                let expected = policy
                    .map(|p| adjusted_fee(p.base_fee, Some(&p.adjustments), category))
                    .unwrap_or(0.0);
                let (paid, status) = self
                    .ledger
                    .payment(&property.id, &owner.id, self.year, month)
                    .map(|p| (p.amount_paid, p.status))
                    .unwrap_or((0.0, PaymentStatus::Unpaid));

                IncomeCell {
                    month,
                    active: true,
                    category,
                    expected,
                    paid,
                    status,
                }
            })
            .collect();

        let totals = cells
            .iter()
            .filter(|c| c.active)
            .fold(CollectionTotals::default(), |mut acc, c| {
                acc.add(CollectionTotals {
                    expected: c.expected,
                    paid: c.paid,
                });
                acc
            });

        IncomeRow {
            owner_id: owner.id.clone(),
            owner_name: owner.name.clone(),
            cells,
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        owner_id, property_id, unit_id, unit_type_id, Adjustment, FeeAdjustments, FeePolicy,
        MonthlyPayment, Owner, Property, Unit, UnitType,
    };
    use iso_currency::Currency;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fixture() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.properties.push(Property {
            id: property_id("p1"),
            name: "Seaside Towers".into(),
            construction_date: d(2024, 3, 10),
            currency: Currency::USD,
        });
        ledger.unit_types.push(UnitType {
            id: unit_type_id("t1"),
            name: "Two-bedroom".into(),
        });
        ledger.owners.push(Owner {
            id: owner_id("o1"),
            property_id: property_id("p1"),
            name: "Arnold".into(),
            active: true,
            join_date: d(2024, 3, 15),
        });
        ledger.owners.push(Owner {
            id: owner_id("o2"),
            property_id: property_id("p1"),
            name: "Bella".into(),
            active: true,
            join_date: d(2024, 6, 1),
        });
        ledger.units.push(Unit {
            id: unit_id("u1"),
            property_id: property_id("p1"),
            unit_type_id: unit_type_id("t1"),
            owner_id: Some(owner_id("o1")),
            label: "A-101".into(),
        });
        ledger.units.push(Unit {
            id: unit_id("u2"),
            property_id: property_id("p1"),
            unit_type_id: unit_type_id("t1"),
            owner_id: Some(owner_id("o2")),
            label: "A-102".into(),
        });
        ledger.fee_policies.push(FeePolicy {
            property_id: property_id("p1"),
            unit_type_id: unit_type_id("t1"),
            year: 2024,
            base_fee: 100.0,
            adjustments: FeeAdjustments {
                penalty: Adjustment::percentage(10.0),
                discount: Adjustment::none(),
            },
        });
        ledger
    }

    #[test]
    fn cells_before_construction_or_join_are_inactive() {
        let ledger = fixture();
        let matrix = CollectionBuilder::new(&ledger, 2024, d(2024, 8, 15))
            .build(&property_id("p1"))
            .unwrap();

        // Rows sorted by name: Arnold first.
        let arnold = &matrix.rows[0];
        assert!(!arnold.cells[0].active); // Jan: before construction.
        assert!(!arnold.cells[1].active);
        assert!(arnold.cells[2].active); // Mar: construction + join month.

        let bella = &matrix.rows[1];
        assert!(!bella.cells[4].active); // May: not yet joined.
        assert!(bella.cells[5].active); // Jun.
    }

    #[test]
    fn past_months_collect_penalty_and_current_collects_base() {
        let ledger = fixture();
        let matrix = CollectionBuilder::new(&ledger, 2024, d(2024, 8, 15))
            .build(&property_id("p1"))
            .unwrap();

        let arnold = &matrix.rows[0];
        assert_eq!(arnold.cells[2].expected, 110.0); // Mar, past: 100 + 10%.
        assert_eq!(arnold.cells[7].expected, 100.0); // Aug, current.
        assert_eq!(arnold.cells[8].expected, 100.0); // Sep, future, no discount.
    }

    #[test]
    fn row_deficits_sum_to_grand_deficit() {
        let mut ledger = fixture();
        ledger.payments.push(MonthlyPayment {
            property_id: property_id("p1"),
            owner_id: owner_id("o1"),
            year: 2024,
            month: 3,
            amount_due: 110.0,
            amount_paid: 50.0,
            status: PaymentStatus::PartiallyPaid,
        });
        let matrix = CollectionBuilder::new(&ledger, 2024, d(2024, 8, 15))
            .build(&property_id("p1"))
            .unwrap();

        let row_deficits: f64 = matrix.rows.iter().map(|r| r.totals.deficit()).sum();
        assert!((row_deficits - matrix.grand.deficit()).abs() < 1e-9);
        assert_eq!(matrix.rows[0].cells[2].paid, 50.0);
        assert_eq!(
            matrix.rows[0].cells[2].status,
            PaymentStatus::PartiallyPaid
        );
    }

    #[test]
    fn column_totals_skip_inactive_cells() {
        let ledger = fixture();
        let matrix = CollectionBuilder::new(&ledger, 2024, d(2024, 8, 15))
            .build(&property_id("p1"))
            .unwrap();

        // January has no active cells at all.
        assert_eq!(matrix.month_totals[0].expected, 0.0);
        // June is past for both owners: 2 × 110.
        assert_eq!(matrix.month_totals[5].expected, 220.0);
    }

    #[test]
    fn unknown_property_is_an_error() {
        let ledger = fixture();
        let err = CollectionBuilder::new(&ledger, 2024, d(2024, 8, 15))
            .build(&property_id("nope"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::UnknownProperty(_)));
    }
}
