use async_trait::async_trait;

use crate::{entities::Ledger, errors::LedgerError};

/// Access to the persisted ledger snapshot.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    fn load_string(&self, snapshot_json: &str) -> Result<Ledger, LedgerError>;

    fn save_string(&self, ledger: &Ledger) -> Result<String, LedgerError>;

    async fn load_file<P>(&self, path: P) -> Result<Ledger, LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;

    async fn save_file<P>(&self, ledger: &Ledger, path: P) -> Result<(), LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}
