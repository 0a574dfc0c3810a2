use chrono::NaiveDate;

use crate::{
    data::repositories::ledger_repository_impl::LedgerRepositoryImpl,
    domain::usecases::{
        collection_usecase::{CollectionUsecase as _, CollectionUsecaseImpl},
        report_usecase::{ReportUsecase as _, ReportUsecaseImpl},
    },
    entities::{
        FeePolicy, IncomeMatrix, Ledger, MonthlyOutcome, OutcomeMatrix, OwnerBalance, OwnerId,
        PaymentHistoryEntry, PaymentReceipt, PropertyId,
    },
    errors::LedgerError,
    presentation::{matrix_csv::MatrixCsvWriter, report_printer::ReportPrinter},
    repositories::LedgerRepository as _,
};

/// Facade tying the snapshot repository, the usecases and the report
/// renderers together. Stateless: the ledger is always passed explicitly.
pub struct HoaLedgerUtil {
    repository: LedgerRepositoryImpl,
    collection: CollectionUsecaseImpl,
    reports: ReportUsecaseImpl,
    printer: ReportPrinter,
    csv: MatrixCsvWriter,
}

impl Default for HoaLedgerUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl HoaLedgerUtil {
    pub fn new() -> Self {
        Self {
            repository: LedgerRepositoryImpl::new(),
            collection: CollectionUsecaseImpl::new(),
            reports: ReportUsecaseImpl::new(),
            printer: ReportPrinter::new(),
            csv: MatrixCsvWriter::new(),
        }
    }

    // Snapshot in/out.
    // ---

    pub fn from_string(&self, snapshot_json: &str) -> Result<Ledger, LedgerError> {
        self.repository.load_string(snapshot_json)
    }

    pub async fn from_file<P>(&self, path: P) -> Result<Ledger, LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        self.repository.load_file(path).await
    }

    pub fn to_string(&self, ledger: &Ledger) -> Result<String, LedgerError> {
        self.repository.save_string(ledger)
    }

    pub async fn to_file<P>(&self, ledger: &Ledger, path: P) -> Result<(), LedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        self.repository.save_file(ledger, path).await
    }

    // Collection mutations.
    // ---

    #[allow(clippy::too_many_arguments)]
    pub fn record_payment(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        amount: f64,
        as_of: NaiveDate,
        note: Option<String>,
    ) -> Result<PaymentReceipt, LedgerError> {
        self.collection
            .record_payment(ledger, property_id, owner_id, year, month, amount, as_of, note)
    }

    pub fn pause_cell(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        as_of: NaiveDate,
    ) -> Result<(), LedgerError> {
        self.collection
            .pause_cell(ledger, property_id, owner_id, year, month, as_of)
    }

    pub fn resume_cell(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
    ) -> Result<(), LedgerError> {
        self.collection
            .resume_cell(ledger, property_id, owner_id, year, month)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_amount_due(
        &self,
        ledger: &mut Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
        month: u32,
        amount_due: f64,
        as_of: NaiveDate,
    ) -> Result<(), LedgerError> {
        self.collection
            .set_amount_due(ledger, property_id, owner_id, year, month, amount_due, as_of)
    }

    pub fn add_outcome(
        &self,
        ledger: &mut Ledger,
        outcome: MonthlyOutcome,
    ) -> Result<usize, LedgerError> {
        self.collection.add_outcome(ledger, outcome)
    }

    pub fn confirm_outcome(&self, ledger: &mut Ledger, index: usize) -> Result<(), LedgerError> {
        self.collection.confirm_outcome(ledger, index)
    }

    pub fn void_outcome(&self, ledger: &mut Ledger, index: usize) -> Result<(), LedgerError> {
        self.collection.void_outcome(ledger, index)
    }

    pub fn save_fee_policy(
        &self,
        ledger: &mut Ledger,
        policy: FeePolicy,
    ) -> Result<(), LedgerError> {
        self.collection.save_fee_policy(ledger, policy)
    }

    // Aggregation.
    // ---

    pub fn income_matrix(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
    ) -> Result<IncomeMatrix, LedgerError> {
        self.reports.income_matrix(ledger, property_id, year, as_of)
    }

    pub fn outcome_matrix(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
    ) -> Result<OutcomeMatrix, LedgerError> {
        self.reports.outcome_matrix(ledger, property_id, year)
    }

    pub fn owner_balances(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
    ) -> Result<Vec<OwnerBalance>, LedgerError> {
        self.reports.owner_balances(ledger, property_id, year, as_of)
    }

    pub fn audit_trail(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
    ) -> Result<Vec<PaymentHistoryEntry>, LedgerError> {
        self.reports.audit_trail(ledger, property_id, owner_id, year)
    }

    // Rendering.
    // ---

    pub fn collection_report(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
    ) -> Result<String, LedgerError> {
        let property = ledger
            .property(property_id)
            .ok_or_else(|| LedgerError::UnknownProperty(property_id.clone()))?;
        let matrix = self.income_matrix(ledger, property_id, year, as_of)?;
        Ok(self.printer.print_collection_report(property, &matrix))
    }

    pub fn outcome_report(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
    ) -> Result<String, LedgerError> {
        let property = ledger
            .property(property_id)
            .ok_or_else(|| LedgerError::UnknownProperty(property_id.clone()))?;
        let matrix = self.outcome_matrix(ledger, property_id, year)?;
        Ok(self.printer.print_outcome_report(property, &matrix))
    }

    pub fn balance_report(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
    ) -> Result<String, LedgerError> {
        let property = ledger
            .property(property_id)
            .ok_or_else(|| LedgerError::UnknownProperty(property_id.clone()))?;
        let balances = self.owner_balances(ledger, property_id, year, as_of)?;
        Ok(self.printer.print_owner_balances(property, year, &balances))
    }

    pub fn audit_report(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        owner_id: &OwnerId,
        year: i32,
    ) -> Result<String, LedgerError> {
        let property = ledger
            .property(property_id)
            .ok_or_else(|| LedgerError::UnknownProperty(property_id.clone()))?;
        let owner = ledger
            .owner(owner_id)
            .ok_or_else(|| LedgerError::UnknownOwner(owner_id.clone()))?;
        let entries = self.audit_trail(ledger, property_id, owner_id, year)?;
        Ok(self
            .printer
            .print_audit_trail(property, &owner.name, &entries))
    }

    pub fn income_matrix_csv(&self, matrix: &IncomeMatrix) -> Result<String, LedgerError> {
        self.csv.income_csv(matrix)
    }

    pub fn outcome_matrix_csv(&self, matrix: &OutcomeMatrix) -> Result<String, LedgerError> {
        self.csv.outcome_csv(matrix)
    }

    /// Writes the printable collection report and its CSV side by side, the
    /// way the original system exported both artifacts in one action.
    pub async fn write_collection_exports<P>(
        &self,
        ledger: &Ledger,
        property_id: &PropertyId,
        year: i32,
        as_of: NaiveDate,
        report_path: P,
        csv_path: P,
    ) -> Result<(), LedgerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let property = ledger
            .property(property_id)
            .ok_or_else(|| LedgerError::UnknownProperty(property_id.clone()))?;
        let matrix = self.income_matrix(ledger, property_id, year, as_of)?;
        let report = self.printer.print_collection_report(property, &matrix);
        let csv = self.income_matrix_csv(&matrix)?;

        let write = |path: P, contents: String| async move {
            tokio::fs::write(&path, contents)
                .await
                .map_err(|e| LedgerError::FileWrite {
                    path: path.as_ref().to_string_lossy().into_owned(),
                    source: e,
                })
        };
        futures::try_join!(write(report_path, report), write(csv_path, csv))?;
        Ok(())
    }
}
