use super::ids::{CategoryId, PropertyId};

#[derive(Debug, Clone)]
pub struct OutcomeCategory {
    pub id: CategoryId,
    pub name: String,
}

/// One expense entry for a property month. Drafts (`confirmed == false`)
/// contribute nothing to totals until confirmed.
#[derive(Debug, Clone)]
pub struct MonthlyOutcome {
    pub property_id: PropertyId,
    pub category_id: CategoryId,
    pub year: i32,
    pub month: u32,
    pub amount: f64,
    pub description: String,
    pub confirmed: bool,
}
