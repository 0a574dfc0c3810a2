use std::sync::LazyLock;

use crate::entities::{category_id, OutcomeCategory};

fn category(id: &str, name: &str) -> OutcomeCategory {
    OutcomeCategory {
        id: category_id(id),
        name: name.to_string(),
    }
}

pub static MAINTENANCE: LazyLock<OutcomeCategory> =
    LazyLock::new(|| category("maintenance", "Maintenance"));
pub static ELECTRICITY: LazyLock<OutcomeCategory> =
    LazyLock::new(|| category("electricity", "Electricity"));
pub static WATER: LazyLock<OutcomeCategory> = LazyLock::new(|| category("water", "Water"));
pub static SECURITY: LazyLock<OutcomeCategory> =
    LazyLock::new(|| category("security", "Security"));
pub static CLEANING: LazyLock<OutcomeCategory> =
    LazyLock::new(|| category("cleaning", "Cleaning"));
pub static ELEVATOR: LazyLock<OutcomeCategory> =
    LazyLock::new(|| category("elevator", "Elevator"));
pub static RESERVE_FUND: LazyLock<OutcomeCategory> =
    LazyLock::new(|| category("reserve_fund", "Reserve fund"));

/// The default category set offered when a property is first set up.
pub fn default_categories() -> Vec<OutcomeCategory> {
    vec![
        MAINTENANCE.clone(),
        ELECTRICITY.clone(),
        WATER.clone(),
        SECURITY.clone(),
        CLEANING.clone(),
        ELEVATOR.clone(),
        RESERVE_FUND.clone(),
    ]
}
