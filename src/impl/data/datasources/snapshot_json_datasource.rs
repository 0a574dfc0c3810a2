use async_trait::async_trait;
use tracing::debug;

use crate::{data::models::snapshot_model::SnapshotModel, entities::Ledger, errors::LedgerError};

/// Reads and writes the single-document JSON snapshot (the "backup" file of
/// the original system).
#[async_trait]
pub(crate) trait SnapshotJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Ledger, LedgerError>;

    fn to_string(&self, ledger: &Ledger) -> Result<String, LedgerError>;

    async fn from_file<P>(&self, path: P) -> Result<Ledger, LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;

    async fn to_file<P>(&self, ledger: &Ledger, path: P) -> Result<(), LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}

pub(crate) struct SnapshotJsonDatasourceImpl;

impl SnapshotJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SnapshotJsonDatasource for SnapshotJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Ledger, LedgerError> {
        let snapshot: SnapshotModel = serde_json::from_str(s)?;
        let ledger = snapshot.into_ledger()?;
        debug!(
            properties = ledger.properties.len(),
            owners = ledger.owners.len(),
            payments = ledger.payments.len(),
            "snapshot loaded"
        );
        Ok(ledger)
    }

    fn to_string(&self, ledger: &Ledger) -> Result<String, LedgerError> {
        Ok(serde_json::to_string_pretty(&SnapshotModel::from_ledger(
            ledger,
        ))?)
    }

    async fn from_file<P>(&self, path: P) -> Result<Ledger, LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
            LedgerError::SnapshotRead {
                path: path.as_ref().to_string_lossy().into_owned(),
                source: e,
            }
        })?;
        self.from_string(&contents)
    }

    async fn to_file<P>(&self, ledger: &Ledger, path: P) -> Result<(), LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let contents = self.to_string(ledger)?;
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| LedgerError::FileWrite {
                path: path.as_ref().to_string_lossy().into_owned(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{owner_id, property_id, PaymentStatus};

    const SNAPSHOT: &str = r#"{
        "properties": [
            {"id": "p1", "name": "Seaside Towers",
             "constructionDate": "2024-03-10", "currency": "USD"}
        ],
        "unitTypes": [{"id": "t1", "name": "Two-bedroom"}],
        "units": [
            {"id": "u1", "propertyId": "p1", "unitTypeId": "t1",
             "ownerId": "o1", "label": "A-101"}
        ],
        "owners": [
            {"id": "o1", "propertyId": "p1", "name": "Arnold",
             "active": true, "joinDate": "2024-03-15"}
        ],
        "feePolicies": [
            {"propertyId": "p1", "unitTypeId": "t1", "year": 2024,
             "baseFee": "1,200.00",
             "penalty": {"amount": 10, "kind": "PERCENTAGE"},
             "discount": {"amount": 0, "kind": "FIXED"}}
        ],
        "payments": [
            {"propertyId": "p1", "ownerId": "o1", "year": 2024, "month": 4,
             "amountDue": 1200, "amountPaid": 500, "status": "PARTIALLY_PAID"}
        ]
    }"#;

    #[test]
    fn loads_a_snapshot_with_string_and_numeric_amounts() {
        let ledger = SnapshotJsonDatasourceImpl::new()
            .from_string(SNAPSHOT)
            .unwrap();
        assert_eq!(ledger.fee_policies[0].base_fee, 1200.0);
        let payment = ledger
            .payment(&property_id("p1"), &owner_id("o1"), 2024, 4)
            .unwrap();
        assert_eq!(payment.amount_paid, 500.0);
        assert_eq!(payment.status, PaymentStatus::PartiallyPaid);
    }

    #[test]
    fn round_trips_through_to_string() {
        let datasource = SnapshotJsonDatasourceImpl::new();
        let ledger = datasource.from_string(SNAPSHOT).unwrap();
        let rendered = datasource.to_string(&ledger).unwrap();
        let reloaded = datasource.from_string(&rendered).unwrap();
        assert_eq!(reloaded.owners.len(), 1);
        assert_eq!(reloaded.fee_policies[0].adjustments.penalty.amount, 10.0);
    }

    #[test]
    fn rejects_dangling_owner_reference() {
        let broken = SNAPSHOT.replace(r#""ownerId": "o1""#, r#""ownerId": "ghost""#);
        let err = SnapshotJsonDatasourceImpl::new()
            .from_string(&broken)
            .unwrap_err();
        assert!(matches!(err, LedgerError::UnknownOwner(_)));
    }

    #[test]
    fn rejects_out_of_range_month() {
        let broken = SNAPSHOT.replace(r#""month": 4"#, r#""month": 13"#);
        let err = SnapshotJsonDatasourceImpl::new()
            .from_string(&broken)
            .unwrap_err();
        assert!(matches!(err, LedgerError::MonthOutOfRange { month: 13 }));
    }
}
