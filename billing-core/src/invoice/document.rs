//! Invoice document for a finalized bill

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::models::{BillLine, PaymentMethod, SaleRecord};

use super::text::TextReceiptBuilder;
use crate::pricing::BillSummary;
use crate::utils::time::{clock_label, day_key, invoice_date_label};
use crate::utils::{AppError, AppResult};

pub const INVOICE_TITLE: &str = "Restaurant Invoice";

/// Shown when no customer name was entered
pub const DEFAULT_CUSTOMER: &str = "Customer";

/// Shown when no table number was entered
pub const NO_TABLE: &str = "—";

/// Totals row below the item lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryRow {
    Subtotal(i64),
    Tax(i64),
    Discount(i64),
    GrandTotal(i64),
}

impl SummaryRow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subtotal(_) => "Subtotal",
            Self::Tax(_) => "Tax",
            Self::Discount(_) => "Discount",
            Self::GrandTotal(_) => "Grand Total",
        }
    }

    /// Amount as printed; discounts carry a leading minus
    pub fn amount_text(&self) -> String {
        match self {
            Self::Discount(v) => format!("-{}", v),
            Self::Subtotal(v) | Self::Tax(v) | Self::GrandTotal(v) => v.to_string(),
        }
    }
}

/// Snapshot of a finalized bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub title: String,
    pub issued_at: NaiveDateTime,
    pub customer_name: String,
    /// `None` when no table number was entered
    pub table_no: Option<String>,
    pub lines: Vec<BillLine>,
    pub subtotal: i64,
    pub tax: i64,
    pub discount: i64,
    pub grand_total: i64,
    pub payment_method: PaymentMethod,
}

impl InvoiceDocument {
    /// Build the invoice for a bill
    ///
    /// Blank customer and table inputs fall back to their placeholders.
    /// An empty bill is rejected with `OrderEmpty`.
    pub fn from_bill(
        bill: &BillSummary,
        customer_name: &str,
        table_no: &str,
        payment_method: PaymentMethod,
        issued_at: NaiveDateTime,
    ) -> AppResult<Self> {
        if bill.is_empty() || bill.lines.is_empty() {
            return Err(AppError::empty_bill());
        }

        let customer = customer_name.trim();
        let table = table_no.trim();

        Ok(Self {
            title: INVOICE_TITLE.to_string(),
            issued_at,
            customer_name: if customer.is_empty() {
                DEFAULT_CUSTOMER.to_string()
            } else {
                customer.to_string()
            },
            table_no: (!table.is_empty()).then(|| table.to_string()),
            lines: bill.lines.clone(),
            subtotal: bill.subtotal,
            tax: bill.tax,
            discount: bill.discount,
            grand_total: bill.grand_total,
            payment_method,
        })
    }

    /// e.g. "18 Oct 2026"
    pub fn date_label(&self) -> String {
        invoice_date_label(self.issued_at.date())
    }

    /// e.g. "02:30 pm"
    pub fn time_label(&self) -> String {
        clock_label(self.issued_at.time())
    }

    pub fn table_label(&self) -> &str {
        self.table_no.as_deref().unwrap_or(NO_TABLE)
    }

    /// Totals rows in print order
    ///
    /// Subtotal is listed only when tax or discount apply.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        let mut rows = Vec::with_capacity(4);
        if self.tax > 0 || self.discount > 0 {
            rows.push(SummaryRow::Subtotal(self.subtotal));
            if self.tax > 0 {
                rows.push(SummaryRow::Tax(self.tax));
            }
            if self.discount > 0 {
                rows.push(SummaryRow::Discount(self.discount));
            }
        }
        rows.push(SummaryRow::GrandTotal(self.grand_total));
        rows
    }

    /// File name without extension, e.g. `Invoice_Table4_18_Oct_2026`
    pub fn file_stem(&self) -> String {
        let date = self.date_label().replace(char::is_whitespace, "_");
        match &self.table_no {
            Some(table) => format!("Invoice_Table{}_{}", sanitize_file_part(table), date),
            None => format!("Invoice_{}", date),
        }
    }

    /// Plain-text rendering at `width` columns
    pub fn render_text(&self, width: usize) -> String {
        let mut b = TextReceiptBuilder::new(width);

        b.text_center(&self.title);
        b.write_line(&format!("Date: {} {}", self.date_label(), self.time_label()));
        b.write_line(&format!("Customer: {}", self.customer_name));
        b.write_line(&format!("Table: {}", self.table_label()));
        b.eq_sep();

        for line in &self.lines {
            b.line_lr(
                &format!("{} x {} @ {}", line.name, line.qty, line.price),
                &line.total.to_string(),
            );
        }
        b.dash_sep();

        for row in self.summary_rows() {
            if let SummaryRow::GrandTotal(_) = row {
                b.eq_sep();
            }
            b.line_lr(row.label(), &row.amount_text());
        }
        b.write_line(&format!("Paid by: {}", self.payment_method));

        b.finalize()
    }

    /// The ledger record for this invoice
    pub fn to_sale_record(&self) -> SaleRecord {
        SaleRecord {
            date: day_key(self.issued_at.date()),
            time: self.time_label(),
            amount: self.grand_total,
            items: self.lines.clone(),
            payment_method: self.payment_method.clone(),
            tax: self.tax,
            discount: self.discount,
        }
    }
}

/// Keep a table number safe inside a file name
fn sanitize_file_part(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
