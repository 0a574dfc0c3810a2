use async_trait::async_trait;

use crate::{
    data::datasources::snapshot_json_datasource::{
        SnapshotJsonDatasource, SnapshotJsonDatasourceImpl,
    },
    domain::repositories::ledger_repository::LedgerRepository,
    entities::Ledger,
    errors::LedgerError,
};

pub(crate) struct LedgerRepositoryImpl<
    DS = SnapshotJsonDatasourceImpl, // Default.
> where
    DS: SnapshotJsonDatasource,
{
    snapshot_datasource: DS,
}

#[async_trait]
impl<DS> LedgerRepository for LedgerRepositoryImpl<DS>
where
    DS: SnapshotJsonDatasource,
{
    fn load_string(&self, snapshot_json: &str) -> Result<Ledger, LedgerError> {
        self.snapshot_datasource.from_string(snapshot_json)
    }

    fn save_string(&self, ledger: &Ledger) -> Result<String, LedgerError> {
        self.snapshot_datasource.to_string(ledger)
    }

    async fn load_file<P>(&self, path: P) -> Result<Ledger, LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        self.snapshot_datasource.from_file(path).await
    }

    async fn save_file<P>(&self, ledger: &Ledger, path: P) -> Result<(), LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        self.snapshot_datasource.to_file(ledger, path).await
    }
}

impl LedgerRepositoryImpl<SnapshotJsonDatasourceImpl> {
    pub(crate) fn new() -> Self {
        LedgerRepositoryImpl {
            snapshot_datasource: SnapshotJsonDatasourceImpl::new(),
        }
    }
}
