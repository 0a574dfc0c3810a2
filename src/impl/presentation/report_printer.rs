use crate::entities::{
    IncomeMatrix, OutcomeMatrix, OwnerBalance, PaymentHistoryEntry, PaymentStatus, Property,
    MONTH_NAMES,
};

use super::amount_fmt::format_amount;

impl PaymentStatus {
    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::PartiallyPaid => "PARTIALLY PAID",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Paused => "PAUSED",
        }
    }
}

/// Renders printable plain-text reports out of the aggregation results.
pub(crate) struct ReportPrinter;

impl ReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_collection_report(
        &self,
        property: &Property,
        matrix: &IncomeMatrix,
    ) -> String {
        let mut out = String::new();
        let currency = property.currency;

        out.push_str(&format!(
            "Collection report - {} - {}\n\n",
            property.name, matrix.year
        ));

        out.push_str(
            "--- Owners -------------------------------------------------------------------\n\n",
        );
        for row in &matrix.rows {
            out.push_str(&format!("{}\n", row.owner_name));
            for cell in row.cells.iter().filter(|c| c.active) {
                out.push_str(&format!(
                    "    {:4} {:>16} due {:>16} paid   {}\n",
                    MONTH_NAMES[cell.month as usize - 1],
                    format_amount(cell.expected, currency),
                    format_amount(cell.paid, currency),
                    cell.status.label(),
                ));
            }
            out.push_str(&format!(
                "    year {:>15} due {:>16} paid   deficit {}\n\n",
                format_amount(row.totals.expected, currency),
                format_amount(row.totals.paid, currency),
                format_amount(row.totals.deficit(), currency),
            ));
        }

        out.push_str(
            "--- Monthly totals -----------------------------------------------------------\n\n",
        );
        for (i, totals) in matrix.month_totals.iter().enumerate() {
            if totals.expected == 0.0 && totals.paid == 0.0 {
                continue;
            }
            out.push_str(&format!(
                "    {:4} {:>16} due {:>16} paid   deficit {}\n",
                MONTH_NAMES[i],
                format_amount(totals.expected, currency),
                format_amount(totals.paid, currency),
                format_amount(totals.deficit(), currency),
            ));
        }
        out.push('\n');

        out.push_str(
            "--- Grand total --------------------------------------------------------------\n\n",
        );
        out.push_str(&format!(
            "    {:>21} due {:>16} paid   deficit {}\n",
            format_amount(matrix.grand.expected, currency),
            format_amount(matrix.grand.paid, currency),
            format_amount(matrix.grand.deficit(), currency),
        ));

        out
    }

    pub(crate) fn print_outcome_report(
        &self,
        property: &Property,
        matrix: &OutcomeMatrix,
    ) -> String {
        let mut out = String::new();
        let currency = property.currency;

        out.push_str(&format!(
            "Outcome report - {} - {}\n\n",
            property.name, matrix.year
        ));

        out.push_str(
            "--- Categories ---------------------------------------------------------------\n\n",
        );
        for row in &matrix.rows {
            out.push_str(&format!("{}\n", row.category_name));
            for cell in &row.cells {
                if cell.amount == 0.0 && cell.draft_count == 0 {
                    continue;
                }
                let drafts = if cell.draft_count > 0 {
                    format!("   ({} draft)", cell.draft_count)
                } else {
                    String::new()
                };
                out.push_str(&format!(
                    "    {:4} {:>16}{}\n",
                    MONTH_NAMES[cell.month as usize - 1],
                    format_amount(cell.amount, currency),
                    drafts,
                ));
            }
            out.push_str(&format!(
                "    year {:>15}\n\n",
                format_amount(row.total, currency)
            ));
        }

        out.push_str(
            "--- Grand total --------------------------------------------------------------\n\n",
        );
        out.push_str(&format!(
            "    {:>21}\n",
            format_amount(matrix.grand_total, currency)
        ));

        out
    }

    pub(crate) fn print_owner_balances(
        &self,
        property: &Property,
        year: i32,
        balances: &[OwnerBalance],
    ) -> String {
        let mut out = String::new();
        let currency = property.currency;

        out.push_str(&format!(
            "Balance report - {} - {}\n\n",
            property.name, year
        ));
        for balance in balances {
            out.push_str(&format!(
                "    {:30} {:>16} due {:>16} paid   deficit {}\n",
                balance.owner_name,
                format_amount(balance.totals.expected, currency),
                format_amount(balance.totals.paid, currency),
                format_amount(balance.totals.deficit(), currency),
            ));
        }
        out
    }

    pub(crate) fn print_audit_trail(
        &self,
        property: &Property,
        owner_name: &str,
        entries: &[PaymentHistoryEntry],
    ) -> String {
        let mut out = String::new();
        let currency = property.currency;

        out.push_str(&format!(
            "Payment history - {} - {}\n\n",
            property.name, owner_name
        ));
        for entry in entries {
            out.push_str(&format!(
                "{} {}-{:02} {:>16} -> {}\n",
                entry.recorded_on,
                entry.year,
                entry.month,
                format_amount(entry.previous_amount, currency),
                format_amount(entry.new_amount, currency),
            ));
            if let Some(note) = &entry.note {
                for line in textwrap::wrap(note, 74) {
                    out.push_str(&format!("    ; {}\n", line));
                }
            }
        }
        out
    }
}
