use chrono::NaiveDate;

use super::ids::{OwnerId, PropertyId};

/// A homeowner registered in a property. Owners joined after a billing month
/// (or flagged inactive) are excluded from that month's collection.
#[derive(Debug, Clone)]
pub struct Owner {
    pub id: OwnerId,
    pub property_id: PropertyId,
    pub name: String,
    pub active: bool,
    pub join_date: NaiveDate,
}
