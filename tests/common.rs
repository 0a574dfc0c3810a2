use chrono::NaiveDate;
use hoa_ledger::entities::Ledger;
use hoa_ledger::util::HoaLedgerUtil;

/// Snapshot used across the integration suites: one property built in
/// March 2024, two owners joining in March and June, a 10% late penalty
/// and a 5% early-payment discount.
pub const SNAPSHOT: &str = r#"{
    "properties": [
        {"id": "p1", "name": "Seaside Towers",
         "constructionDate": "2024-03-10", "currency": "USD"}
    ],
    "unitTypes": [
        {"id": "t1", "name": "Two-bedroom"},
        {"id": "t2", "name": "Studio"}
    ],
    "units": [
        {"id": "u1", "propertyId": "p1", "unitTypeId": "t1",
         "ownerId": "o1", "label": "A-101"},
        {"id": "u2", "propertyId": "p1", "unitTypeId": "t2",
         "ownerId": "o2", "label": "A-102"}
    ],
    "owners": [
        {"id": "o1", "propertyId": "p1", "name": "Arnold",
         "active": true, "joinDate": "2024-03-15"},
        {"id": "o2", "propertyId": "p1", "name": "Bella",
         "active": true, "joinDate": "2024-06-01"},
        {"id": "o3", "propertyId": "p1", "name": "Carl",
         "active": false, "joinDate": "2024-01-01"}
    ],
    "categories": [
        {"id": "maintenance", "name": "Maintenance"},
        {"id": "security", "name": "Security"}
    ],
    "feePolicies": [
        {"propertyId": "p1", "unitTypeId": "t1", "year": 2024,
         "baseFee": 100,
         "penalty": {"amount": 10, "kind": "PERCENTAGE"},
         "discount": {"amount": 5, "kind": "PERCENTAGE"}},
        {"propertyId": "p1", "unitTypeId": "t2", "year": 2024,
         "baseFee": 60,
         "penalty": {"amount": 15, "kind": "FIXED"},
         "discount": {"amount": 0, "kind": "FIXED"}}
    ],
    "outcomes": [
        {"propertyId": "p1", "categoryId": "maintenance", "year": 2024,
         "month": 4, "amount": 300, "description": "Roof repair",
         "confirmed": true},
        {"propertyId": "p1", "categoryId": "security", "year": 2024,
         "month": 4, "amount": 450, "description": "Night guard",
         "confirmed": false}
    ]
}"#;

pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()
}

pub fn load() -> (HoaLedgerUtil, Ledger) {
    let util = HoaLedgerUtil::new();
    let ledger = util.from_string(SNAPSHOT).expect("fixture snapshot loads");
    (util, ledger)
}
