#![allow(dead_code)]

use eshop_payments::domain::order::{Order, Product};
use eshop_payments::domain::payment::{BANK_NAME, PaymentData, REFERENCE_CODE, VOUCHER_CODE};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

pub const PAYMENTS_HEADER: &str = "id, order_id, method, voucher_code, bank_name, reference_code";

pub fn order(id: &str) -> Arc<Order> {
    let product = Product::new(
        "eb558e9f-1c39-460e-8860-71af6af63bd6",
        "Sampo Cap Bambang",
        2,
    );
    Arc::new(Order::new(id, vec![product], 1708560000, "Safira Sudrajat"))
}

pub fn voucher_data(code: &str) -> PaymentData {
    PaymentData::new().with(VOUCHER_CODE, code)
}

pub fn bank_transfer_data(bank_name: &str, reference_code: &str) -> PaymentData {
    PaymentData::new()
        .with(BANK_NAME, bank_name)
        .with(REFERENCE_CODE, reference_code)
}

/// Writes a payments CSV with the standard header followed by `rows`.
pub fn payments_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{PAYMENTS_HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
