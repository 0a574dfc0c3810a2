use iso_currency::Currency;
use serde_derive::{Deserialize, Serialize};

use crate::{
    entities::{
        Adjustment, CategoryId, FeeAdjustments, FeePolicy, Ledger, MonthlyOutcome, MonthlyPayment,
        OutcomeCategory, Owner, OwnerId, PaymentHistoryEntry, Property, PropertyId, Unit, UnitId,
        UnitType, UnitTypeId,
    },
    errors::LedgerError,
};

use super::{
    adjustment_kind_model::AdjustmentKindModel, iso_date_model::ISODateModel,
    money_amount_model::MoneyAmountModel, payment_status_model::PaymentStatusModel,
};

/// The backup document: one JSON object holding the whole ledger. Field
/// names stay camelCase to remain compatible with snapshots exported by the
/// original system.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SnapshotModel {
    #[serde(default)]
    pub properties: Vec<PropertyModel>,
    #[serde(default)]
    pub unit_types: Vec<UnitTypeModel>,
    #[serde(default)]
    pub units: Vec<UnitModel>,
    #[serde(default)]
    pub owners: Vec<OwnerModel>,
    #[serde(default)]
    pub categories: Vec<CategoryModel>,
    #[serde(default)]
    pub fee_policies: Vec<FeePolicyModel>,
    #[serde(default)]
    pub payments: Vec<PaymentModel>,
    #[serde(default)]
    pub payment_history: Vec<PaymentHistoryModel>,
    #[serde(default)]
    pub outcomes: Vec<OutcomeModel>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PropertyModel {
    pub id: String,
    pub name: String,
    pub construction_date: ISODateModel,
    pub currency: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnitTypeModel {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnitModel {
    pub id: String,
    pub property_id: String,
    pub unit_type_id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OwnerModel {
    pub id: String,
    pub property_id: String,
    pub name: String,
    pub active: bool,
    pub join_date: ISODateModel,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryModel {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdjustmentModel {
    pub amount: MoneyAmountModel,
    pub kind: AdjustmentKindModel,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeePolicyModel {
    pub property_id: String,
    pub unit_type_id: String,
    pub year: i32,
    pub base_fee: MoneyAmountModel,
    pub penalty: AdjustmentModel,
    pub discount: AdjustmentModel,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentModel {
    pub property_id: String,
    pub owner_id: String,
    pub year: i32,
    pub month: u32,
    pub amount_due: MoneyAmountModel,
    pub amount_paid: MoneyAmountModel,
    pub status: PaymentStatusModel,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentHistoryModel {
    pub property_id: String,
    pub owner_id: String,
    pub year: i32,
    pub month: u32,
    pub previous_amount: MoneyAmountModel,
    pub new_amount: MoneyAmountModel,
    pub recorded_on: ISODateModel,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OutcomeModel {
    pub property_id: String,
    pub category_id: String,
    pub year: i32,
    pub month: u32,
    pub amount: MoneyAmountModel,
    #[serde(default)]
    pub description: String,
    pub confirmed: bool,
}

// Conversion into the domain state, with validation.
// ---

use crate::entities::checked_month as check_month;

fn parse_currency(code: &str) -> Result<Currency, LedgerError> {
    Currency::from_code(code).ok_or_else(|| LedgerError::InvalidCurrencyCode {
        code: code.to_string(),
    })
}

impl SnapshotModel {
    pub(crate) fn into_ledger(self) -> Result<Ledger, LedgerError> {
        let mut ledger = Ledger {
            properties: self
                .properties
                .into_iter()
                .map(|p| {
                    Ok(Property {
                        id: PropertyId(p.id),
                        name: p.name,
                        construction_date: p.construction_date.into(),
                        currency: parse_currency(&p.currency)?,
                    })
                })
                .collect::<Result<_, LedgerError>>()?,
            unit_types: self
                .unit_types
                .into_iter()
                .map(|t| UnitType {
                    id: UnitTypeId(t.id),
                    name: t.name,
                })
                .collect(),
            units: self
                .units
                .into_iter()
                .map(|u| Unit {
                    id: UnitId(u.id),
                    property_id: PropertyId(u.property_id),
                    unit_type_id: UnitTypeId(u.unit_type_id),
                    owner_id: u.owner_id.map(OwnerId),
                    label: u.label,
                })
                .collect(),
            owners: self
                .owners
                .into_iter()
                .map(|o| Owner {
                    id: OwnerId(o.id),
                    property_id: PropertyId(o.property_id),
                    name: o.name,
                    active: o.active,
                    join_date: o.join_date.into(),
                })
                .collect(),
            categories: self
                .categories
                .into_iter()
                .map(|c| OutcomeCategory {
                    id: CategoryId(c.id),
                    name: c.name,
                })
                .collect(),
            fee_policies: self
                .fee_policies
                .into_iter()
                .map(|p| FeePolicy {
                    property_id: PropertyId(p.property_id),
                    unit_type_id: UnitTypeId(p.unit_type_id),
                    year: p.year,
                    base_fee: p.base_fee.into(),
                    adjustments: FeeAdjustments {
                        penalty: Adjustment {
                            amount: p.penalty.amount.into(),
                            kind: p.penalty.kind.0,
                        },
                        discount: Adjustment {
                            amount: p.discount.amount.into(),
                            kind: p.discount.kind.0,
                        },
                    },
                })
                .collect(),
            payments: self
                .payments
                .into_iter()
                .map(|p| {
                    Ok(MonthlyPayment {
                        property_id: PropertyId(p.property_id),
                        owner_id: OwnerId(p.owner_id),
                        year: p.year,
                        month: check_month(p.month)?,
                        amount_due: p.amount_due.into(),
                        amount_paid: p.amount_paid.into(),
                        status: p.status.0,
                    })
                })
                .collect::<Result<_, LedgerError>>()?,
            payment_history: self
                .payment_history
                .into_iter()
                .map(|h| {
                    Ok(PaymentHistoryEntry {
                        property_id: PropertyId(h.property_id),
                        owner_id: OwnerId(h.owner_id),
                        year: h.year,
                        month: check_month(h.month)?,
                        previous_amount: h.previous_amount.into(),
                        new_amount: h.new_amount.into(),
                        recorded_on: h.recorded_on.into(),
                        note: h.note,
                    })
                })
                .collect::<Result<_, LedgerError>>()?,
            outcomes: self
                .outcomes
                .into_iter()
                .map(|o| {
                    Ok(MonthlyOutcome {
                        property_id: PropertyId(o.property_id),
                        category_id: CategoryId(o.category_id),
                        year: o.year,
                        month: check_month(o.month)?,
                        amount: o.amount.into(),
                        description: o.description,
                        confirmed: o.confirmed,
                    })
                })
                .collect::<Result<_, LedgerError>>()?,
        };
        validate_references(&ledger)?;
        ledger.payment_history.sort_by_key(|h| h.recorded_on);
        Ok(ledger)
    }

    pub(crate) fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            properties: ledger
                .properties
                .iter()
                .map(|p| PropertyModel {
                    id: p.id.0.clone(),
                    name: p.name.clone(),
                    construction_date: p.construction_date.into(),
                    currency: p.currency.code().to_string(),
                })
                .collect(),
            unit_types: ledger
                .unit_types
                .iter()
                .map(|t| UnitTypeModel {
                    id: t.id.0.clone(),
                    name: t.name.clone(),
                })
                .collect(),
            units: ledger
                .units
                .iter()
                .map(|u| UnitModel {
                    id: u.id.0.clone(),
                    property_id: u.property_id.0.clone(),
                    unit_type_id: u.unit_type_id.0.clone(),
                    owner_id: u.owner_id.as_ref().map(|o| o.0.clone()),
                    label: u.label.clone(),
                })
                .collect(),
            owners: ledger
                .owners
                .iter()
                .map(|o| OwnerModel {
                    id: o.id.0.clone(),
                    property_id: o.property_id.0.clone(),
                    name: o.name.clone(),
                    active: o.active,
                    join_date: o.join_date.into(),
                })
                .collect(),
            categories: ledger
                .categories
                .iter()
                .map(|c| CategoryModel {
                    id: c.id.0.clone(),
                    name: c.name.clone(),
                })
                .collect(),
            fee_policies: ledger
                .fee_policies
                .iter()
                .map(|p| FeePolicyModel {
                    property_id: p.property_id.0.clone(),
                    unit_type_id: p.unit_type_id.0.clone(),
                    year: p.year,
                    base_fee: p.base_fee.into(),
                    penalty: AdjustmentModel {
                        amount: p.adjustments.penalty.amount.into(),
                        kind: AdjustmentKindModel(p.adjustments.penalty.kind),
                    },
                    discount: AdjustmentModel {
                        amount: p.adjustments.discount.amount.into(),
                        kind: AdjustmentKindModel(p.adjustments.discount.kind),
                    },
                })
                .collect(),
            payments: ledger
                .payments
                .iter()
                .map(|p| PaymentModel {
                    property_id: p.property_id.0.clone(),
                    owner_id: p.owner_id.0.clone(),
                    year: p.year,
                    month: p.month,
                    amount_due: p.amount_due.into(),
                    amount_paid: p.amount_paid.into(),
                    status: PaymentStatusModel(p.status),
                })
                .collect(),
            payment_history: ledger
                .payment_history
                .iter()
                .map(|h| PaymentHistoryModel {
                    property_id: h.property_id.0.clone(),
                    owner_id: h.owner_id.0.clone(),
                    year: h.year,
                    month: h.month,
                    previous_amount: h.previous_amount.into(),
                    new_amount: h.new_amount.into(),
                    recorded_on: h.recorded_on.into(),
                    note: h.note.clone(),
                })
                .collect(),
            outcomes: ledger
                .outcomes
                .iter()
                .map(|o| OutcomeModel {
                    property_id: o.property_id.0.clone(),
                    category_id: o.category_id.0.clone(),
                    year: o.year,
                    month: o.month,
                    amount: o.amount.into(),
                    description: o.description.clone(),
                    confirmed: o.confirmed,
                })
                .collect(),
        }
    }
}

/// Every cross-record reference in a loaded snapshot must resolve.
fn validate_references(ledger: &Ledger) -> Result<(), LedgerError> {
    let property_known = |id: &PropertyId| {
        ledger
            .property(id)
            .map(|_| ())
            .ok_or_else(|| LedgerError::UnknownProperty(id.clone()))
    };
    let owner_known = |id: &OwnerId| {
        ledger
            .owner(id)
            .map(|_| ())
            .ok_or_else(|| LedgerError::UnknownOwner(id.clone()))
    };

    for owner in &ledger.owners {
        property_known(&owner.property_id)?;
    }
    for unit in &ledger.units {
        property_known(&unit.property_id)?;
        ledger
            .unit_type(&unit.unit_type_id)
            .ok_or_else(|| LedgerError::UnknownUnitType(unit.unit_type_id.clone()))?;
        if let Some(owner_id) = &unit.owner_id {
            owner_known(owner_id)?;
        }
    }
    for policy in &ledger.fee_policies {
        property_known(&policy.property_id)?;
        ledger
            .unit_type(&policy.unit_type_id)
            .ok_or_else(|| LedgerError::UnknownUnitType(policy.unit_type_id.clone()))?;
    }
    for payment in &ledger.payments {
        property_known(&payment.property_id)?;
        owner_known(&payment.owner_id)?;
    }
    for entry in &ledger.payment_history {
        property_known(&entry.property_id)?;
        owner_known(&entry.owner_id)?;
    }
    for outcome in &ledger.outcomes {
        property_known(&outcome.property_id)?;
        ledger
            .category(&outcome.category_id)
            .ok_or_else(|| LedgerError::UnknownCategory(outcome.category_id.clone()))?;
    }
    Ok(())
}
