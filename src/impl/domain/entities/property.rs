use chrono::NaiveDate;
use iso_currency::Currency;

use super::ids::{OwnerId, PropertyId, UnitId, UnitTypeId};

/// A managed building or complex. Fees for months before the construction
/// date are never collected.
#[derive(Debug, Clone)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub construction_date: NaiveDate,
    pub currency: Currency,
}

#[derive(Debug, Clone)]
pub struct UnitType {
    pub id: UnitTypeId,
    pub name: String,
}

/// A sellable unit (apartment, parking spot, shop) inside a property.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: UnitId,
    pub property_id: PropertyId,
    pub unit_type_id: UnitTypeId,
    pub owner_id: Option<OwnerId>,
    pub label: String,
}
