use crate::domain::payment::{BANK_NAME, PaymentData, REFERENCE_CODE, VOUCHER_CODE};
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a payments file.
///
/// Empty cells and trailing columns left off a short row both read as `None`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub id: String,
    pub order_id: String,
    pub method: String,
    #[serde(default)]
    pub voucher_code: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub reference_code: Option<String>,
}

impl PaymentRecord {
    /// Builds the payment data map from the method-specific columns that are filled in.
    pub fn payment_data(&self) -> PaymentData {
        let mut data = PaymentData::new();
        let fields = [
            (VOUCHER_CODE, &self.voucher_code),
            (BANK_NAME, &self.bank_name),
            (REFERENCE_CODE, &self.reference_code),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                data.insert(key, value.as_str());
            }
        }
        data
    }
}

/// Reads payment records from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<PaymentRecord>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes payment records.
    pub fn records(self) -> impl Iterator<Item = Result<PaymentRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id, order_id, method, voucher_code, bank_name, reference_code";

    fn read(rows: &str) -> Vec<Result<PaymentRecord>> {
        let data = format!("{HEADER}\n{rows}");
        PaymentReader::new(data.as_bytes()).records().collect()
    }

    #[test]
    fn test_reader_valid_stream() {
        let results = read(
            "p-1, o-1, VOUCHER, ESHOP1234ABC5678, , \n\
             p-2, o-1, BANK_TRANSFER, , BCA, REF123456789",
        );

        assert_eq!(results.len(), 2);
        let voucher = results[0].as_ref().unwrap();
        assert_eq!(voucher.id, "p-1");
        assert_eq!(voucher.voucher_code.as_deref(), Some("ESHOP1234ABC5678"));
        assert_eq!(voucher.bank_name, None);

        let bank = results[1].as_ref().unwrap();
        assert_eq!(bank.method, "BANK_TRANSFER");
        assert_eq!(bank.reference_code.as_deref(), Some("REF123456789"));
    }

    #[test]
    fn test_reader_short_row() {
        let results = read("p-1, o-1, VOUCHER, ESHOP1234ABC5678");

        let record = results[0].as_ref().unwrap();
        assert_eq!(record.voucher_code.as_deref(), Some("ESHOP1234ABC5678"));
        assert_eq!(record.reference_code, None);
    }

    #[test]
    fn test_reader_malformed_line() {
        let results = read("p-1");
        assert!(results[0].is_err());
    }

    #[test]
    fn test_payment_data_skips_empty_columns() {
        let results = read("p-2, o-1, BANK_TRANSFER, , BCA, ");
        let data = results[0].as_ref().unwrap().payment_data();

        assert_eq!(data.len(), 1);
        assert_eq!(data.get(BANK_NAME), Some("BCA"));
        assert_eq!(data.get(REFERENCE_CODE), None);
    }
}
