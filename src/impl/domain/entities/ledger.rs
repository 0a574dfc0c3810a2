use super::{
    fee_policy::FeePolicy,
    ids::{CategoryId, OwnerId, PropertyId, UnitTypeId},
    outcome::{MonthlyOutcome, OutcomeCategory},
    owner::Owner,
    payment::{MonthlyPayment, PaymentHistoryEntry},
    property::{Property, Unit, UnitType},
};

/// The whole application state, held as an explicit value. Every mutation
/// goes through the usecases; there is no hidden store.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub properties: Vec<Property>,
    pub unit_types: Vec<UnitType>,
    pub units: Vec<Unit>,
    pub owners: Vec<Owner>,
    pub categories: Vec<OutcomeCategory>,
    pub fee_policies: Vec<FeePolicy>,
    pub payments: Vec<MonthlyPayment>,
    pub payment_history: Vec<PaymentHistoryEntry>,
    pub outcomes: Vec<MonthlyOutcome>,
}

impl Ledger {
    pub fn property(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| &p.id == id)
    }

    pub fn owner(&self, id: &OwnerId) -> Option<&Owner> {
        self.owners.iter().find(|o| &o.id == id)
    }

    pub fn unit_type(&self, id: &UnitTypeId) -> Option<&UnitType> {
        self.unit_types.iter().find(|t| &t.id == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&OutcomeCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn policy_for(
        &self,
        property_id: &PropertyId,
        unit_type_id: &UnitTypeId,
        year: i32,
    ) -> Option<&FeePolicy> {
        self.fee_policies.iter().find(|p| {
            &p.property_id == property_id && &p.unit_type_id == unit_type_id && p.year == year
        })
    }

    /// The unit type an owner is billed under: the type of their
    /// first-by-id unit in the property.
    pub fn billed_unit_type(&self, owner_id: &OwnerId) -> Option<&UnitTypeId> {
        self.units
            .iter()
            .filter(|u| u.owner_id.as_ref() == Some(owner_id))
            .min_by_key(|u| &u.id)
            .map(|u| &u.unit_type_id)
    }

    pub fn payment(
        &self,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
    ) -> Option<&MonthlyPayment> {
        self.payments.iter().find(|p| {
            &p.property_id == property_id
                && &p.owner_id == owner_id
                && p.year == year
                && p.month == month
        })
    }

    pub fn payment_mut(
        &mut self,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
    ) -> Option<&mut MonthlyPayment> {
        self.payments.iter_mut().find(|p| {
            &p.property_id == property_id
                && &p.owner_id == owner_id
                && p.year == year
                && p.month == month
        })
    }

    /// Owners that participate in a property's collection for the given
    /// year: members of the property, flagged active, joined on or before
    /// December 31 of that year.
    pub fn eligible_owners(&self, property_id: &PropertyId, year: i32) -> Vec<&Owner> {
        let year_end = super::calendar::YearMonth::new(year, 12).year_end();
        self.owners
            .iter()
            .filter(|o| &o.property_id == property_id && o.active && o.join_date <= year_end)
            .collect()
    }
}
