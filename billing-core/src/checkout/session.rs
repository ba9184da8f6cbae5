//! Checkout session: one in-progress bill and the operator's inputs

use std::sync::Arc;

use chrono::NaiveDateTime;
use shared::models::{Menu, PaymentMethod, SaleRecord};
use tracing::info;

use crate::invoice::InvoiceDocument;
use crate::ledger::SaleRecorder;
use crate::order::OrderState;
use crate::pricing::money::lenient_amount;
use crate::pricing::{BillSummary, BillView, Percent, calculate_bill};
use crate::sale_log;
use crate::utils::time::{clock_label, day_key};
use crate::utils::{AppError, AppResult};

/// The bill currently being built at the counter
///
/// Every mutation leaves the session consistent; call [`CheckoutSession::view`]
/// afterwards to get the updated display model.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    order: OrderState,
    tax_percent: Percent,
    discount_percent: Percent,
    customer_name: String,
    table_no: String,
    payment_method: PaymentMethod,
    amount_received: i64,
}

impl CheckoutSession {
    pub fn new(menu: Arc<Menu>) -> Self {
        Self {
            order: OrderState::new(menu),
            tax_percent: Percent::ZERO,
            discount_percent: Percent::ZERO,
            customer_name: String::new(),
            table_no: String::new(),
            payment_method: PaymentMethod::default(),
            amount_received: 0,
        }
    }

    // ========== Order ==========

    pub fn order(&self) -> &OrderState {
        &self.order
    }

    pub fn increment(&mut self, item: &str) -> AppResult<u32> {
        self.order.increment(item)
    }

    pub fn decrement(&mut self, item: &str) -> AppResult<u32> {
        self.order.decrement(item)
    }

    // ========== Operator inputs ==========

    pub fn tax_percent(&self) -> Percent {
        self.tax_percent
    }

    pub fn discount_percent(&self) -> Percent {
        self.discount_percent
    }

    pub fn set_tax_percent(&mut self, percent: Percent) {
        self.tax_percent = percent;
    }

    /// Discount is capped at 100%
    pub fn set_discount_percent(&mut self, percent: Percent) {
        self.discount_percent = percent.capped(Percent::HUNDRED);
    }

    /// Tax % from the input field (lenient, bad input reads as 0)
    pub fn set_tax_percent_input(&mut self, input: &str) {
        self.set_tax_percent(Percent::parse_lenient(input));
    }

    /// Discount % from the input field (lenient, bad input reads as 0)
    pub fn set_discount_percent_input(&mut self, input: &str) {
        self.set_discount_percent(Percent::parse_lenient(input));
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_table_no(&mut self, table_no: impl Into<String>) {
        self.table_no = table_no.into();
    }

    pub fn payment_method(&self) -> &PaymentMethod {
        &self.payment_method
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn amount_received(&self) -> i64 {
        self.amount_received
    }

    pub fn set_amount_received(&mut self, amount: i64) {
        self.amount_received = amount.max(0);
    }

    /// Received amount from the input field (lenient, bad input reads as 0)
    pub fn set_amount_received_input(&mut self, input: &str) {
        self.set_amount_received(lenient_amount(input));
    }

    // ========== Derived ==========

    pub fn summary(&self) -> BillSummary {
        calculate_bill(&self.order, self.tax_percent, self.discount_percent)
    }

    pub fn view(&self) -> BillView {
        BillView::derive(
            &self.order,
            self.tax_percent,
            self.discount_percent,
            self.amount_received,
        )
    }

    // ========== Actions ==========

    /// Record the sale and start a new bill
    ///
    /// Rejects an empty bill and a received amount below the grand total;
    /// on any error the session is left untouched.
    pub fn complete_payment(
        &mut self,
        ledger: &impl SaleRecorder,
        now: NaiveDateTime,
    ) -> AppResult<SaleRecord> {
        let bill = self.summary();
        if bill.is_empty() {
            return Err(AppError::empty_bill());
        }
        if self.amount_received < bill.grand_total {
            return Err(AppError::insufficient_payment(
                self.amount_received,
                bill.grand_total,
            ));
        }

        let record = bill.to_sale_record(
            day_key(now.date()),
            clock_label(now.time()),
            self.payment_method.clone(),
        );
        let count = ledger.record_sale(&record)?;

        info!(
            amount = record.amount,
            received = self.amount_received,
            change = self.amount_received - record.amount,
            records = count,
            "Payment completed"
        );
        sale_log!("payment", record.amount, record.payment_method);

        self.clear();
        Ok(record)
    }

    /// Record the sale and produce its invoice
    ///
    /// The bill stays on screen; call [`CheckoutSession::clear`] to start over.
    pub fn issue_invoice(
        &self,
        ledger: &impl SaleRecorder,
        now: NaiveDateTime,
    ) -> AppResult<InvoiceDocument> {
        let document = InvoiceDocument::from_bill(
            &self.summary(),
            &self.customer_name,
            &self.table_no,
            self.payment_method.clone(),
            now,
        )?;
        let count = ledger.record_sale(&document.to_sale_record())?;

        info!(
            amount = document.grand_total,
            table = %document.table_label(),
            records = count,
            "Invoice issued"
        );
        sale_log!(
            "invoice",
            document.grand_total,
            document.payment_method,
            document.file_stem()
        );

        Ok(document)
    }

    /// Reset quantities, percentages, received amount, customer and table
    ///
    /// The payment method is kept for the next bill.
    pub fn clear(&mut self) {
        self.order.reset();
        self.tax_percent = Percent::ZERO;
        self.discount_percent = Percent::ZERO;
        self.amount_received = 0;
        self.customer_name.clear();
        self.table_no.clear();
    }
}
