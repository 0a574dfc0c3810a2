use crate::{
    entities::{Ledger, OutcomeCell, OutcomeMatrix, OutcomeRow, PropertyId},
    errors::LedgerError,
};

/// Builds the category-by-month outcome (expense) matrix for one property
/// year. Only confirmed entries carry amounts; drafts surface as counts.
pub(crate) struct OutcomeBuilder<'a> {
    ledger: &'a Ledger,
    year: i32,
}

impl<'a> OutcomeBuilder<'a> {
    pub(crate) fn new(ledger: &'a Ledger, year: i32) -> Self {
        Self { ledger, year }
    }

    pub(crate) fn build(&self, property_id: &PropertyId) -> Result<OutcomeMatrix, LedgerError> {
        if self.ledger.property(property_id).is_none() {
            return Err(LedgerError::UnknownProperty(property_id.clone()));
        }

        let entries: Vec<_> = self
            .ledger
            .outcomes
            .iter()
            .filter(|o| &o.property_id == property_id && o.year == self.year)
            .collect();

        let mut categories = self.ledger.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        let rows: Vec<OutcomeRow> = categories
            .iter()
            .filter(|c| entries.iter().any(|o| o.category_id == c.id))
            .map(|category| {
                let mut cells: Vec<OutcomeCell> = (1..=12)
                    .map(|month| OutcomeCell {
                        month,
                        ..OutcomeCell::default()
                    })
                    .collect();
                for entry in entries.iter().filter(|o| o.category_id == category.id) {
                    let cell = &mut cells[entry.month as usize - 1];
                    if entry.confirmed {
                        cell.amount += entry.amount;
                    } else {
                        cell.draft_count += 1;
                    }
                }
                let total = cells.iter().map(|c| c.amount).sum();
                OutcomeRow {
                    category_id: category.id.clone(),
                    category_name: category.name.clone(),
                    cells,
                    total,
                }
            })
            .collect();

        let month_totals: Vec<f64> = (0..12)
            .map(|i| rows.iter().map(|r| r.cells[i].amount).sum())
            .collect();
        let grand_total = month_totals.iter().sum();

        Ok(OutcomeMatrix {
            property_id: property_id.clone(),
            year: self.year,
            rows,
            month_totals,
            grand_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        category_id, property_id, MonthlyOutcome, OutcomeCategory, Property,
    };
    use chrono::NaiveDate;
    use iso_currency::Currency;

    fn fixture() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.properties.push(Property {
            id: property_id("p1"),
            name: "Seaside Towers".into(),
            construction_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            currency: Currency::USD,
        });
        ledger.categories.push(OutcomeCategory {
            id: category_id("maintenance"),
            name: "Maintenance".into(),
        });
        ledger.categories.push(OutcomeCategory {
            id: category_id("security"),
            name: "Security".into(),
        });
        let entry = |category: &str, month: u32, amount: f64, confirmed: bool| MonthlyOutcome {
            property_id: property_id("p1"),
            category_id: category_id(category),
            year: 2024,
            month,
            amount,
            description: String::new(),
            confirmed,
        };
        ledger.outcomes.push(entry("maintenance", 2, 300.0, true));
        ledger.outcomes.push(entry("maintenance", 2, 120.0, true));
        ledger.outcomes.push(entry("maintenance", 3, 80.0, false));
        ledger.outcomes.push(entry("security", 2, 450.0, true));
        ledger
    }

    #[test]
    fn confirmed_entries_accumulate_per_cell() {
        let matrix = OutcomeBuilder::new(&fixture(), 2024)
            .build(&property_id("p1"))
            .unwrap();
        let maintenance = &matrix.rows[0];
        assert_eq!(maintenance.cells[1].amount, 420.0);
        assert_eq!(maintenance.total, 420.0);
    }

    #[test]
    fn drafts_count_zero_toward_totals() {
        let matrix = OutcomeBuilder::new(&fixture(), 2024)
            .build(&property_id("p1"))
            .unwrap();
        let maintenance = &matrix.rows[0];
        assert_eq!(maintenance.cells[2].amount, 0.0);
        assert_eq!(maintenance.cells[2].draft_count, 1);
        assert_eq!(matrix.month_totals[2], 0.0);
    }

    #[test]
    fn grand_total_sums_all_confirmed_cells() {
        let matrix = OutcomeBuilder::new(&fixture(), 2024)
            .build(&property_id("p1"))
            .unwrap();
        assert_eq!(matrix.month_totals[1], 870.0);
        assert_eq!(matrix.grand_total, 870.0);
    }
}
