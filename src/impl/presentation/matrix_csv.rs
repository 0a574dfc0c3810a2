use crate::{
    entities::{IncomeMatrix, OutcomeMatrix, MONTH_NAMES},
    errors::LedgerError,
};

/// Writes the aggregation matrices as CSV for spreadsheet import. Inactive
/// income cells are left empty so they stay visually distinct from zero.
pub(crate) struct MatrixCsvWriter;

fn fmt_cell(amount: f64) -> String {
    format!("{:.2}", amount)
}

impl MatrixCsvWriter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn income_csv(&self, matrix: &IncomeMatrix) -> Result<String, LedgerError> {
        let mut writer = csv::Writer::from_writer(vec![]);

        let mut header = vec!["Owner".to_string()];
        header.extend(MONTH_NAMES.iter().map(|m| m.to_string()));
        header.extend(["Expected", "Paid", "Deficit"].map(String::from));
        writer.write_record(&header)?;

        for row in &matrix.rows {
            let mut record = vec![row.owner_name.clone()];
            record.extend(row.cells.iter().map(|cell| {
                if cell.active {
                    fmt_cell(cell.paid)
                } else {
                    String::new()
                }
            }));
            record.push(fmt_cell(row.totals.expected));
            record.push(fmt_cell(row.totals.paid));
            record.push(fmt_cell(row.totals.deficit()));
            writer.write_record(&record)?;
        }

        let mut totals = vec!["Total".to_string()];
        totals.extend(matrix.month_totals.iter().map(|t| fmt_cell(t.paid)));
        totals.push(fmt_cell(matrix.grand.expected));
        totals.push(fmt_cell(matrix.grand.paid));
        totals.push(fmt_cell(matrix.grand.deficit()));
        writer.write_record(&totals)?;

        into_string(writer)
    }

    pub(crate) fn outcome_csv(&self, matrix: &OutcomeMatrix) -> Result<String, LedgerError> {
        let mut writer = csv::Writer::from_writer(vec![]);

        let mut header = vec!["Category".to_string()];
        header.extend(MONTH_NAMES.iter().map(|m| m.to_string()));
        header.push("Total".to_string());
        writer.write_record(&header)?;

        for row in &matrix.rows {
            let mut record = vec![row.category_name.clone()];
            record.extend(row.cells.iter().map(|c| fmt_cell(c.amount)));
            record.push(fmt_cell(row.total));
            writer.write_record(&record)?;
        }

        let mut totals = vec!["Total".to_string()];
        totals.extend(matrix.month_totals.iter().map(|t| fmt_cell(*t)));
        totals.push(fmt_cell(matrix.grand_total));
        writer.write_record(&totals)?;

        into_string(writer)
    }
}

fn into_string(mut writer: csv::Writer<Vec<u8>>) -> Result<String, LedgerError> {
    writer.flush().map_err(csv::Error::from)?;
    let bytes = writer
        .into_inner()
        .expect("flushed csv writer yields its buffer");
    Ok(String::from_utf8(bytes).expect("csv writer emits valid utf-8"))
}
