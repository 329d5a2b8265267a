use crate::domain::payment::{Payment, PaymentStatus};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 4] = ["id", "order_id", "method", "status"];

#[derive(Debug, Serialize)]
struct PaymentRow<'a> {
    id: &'a str,
    order_id: &'a str,
    method: &'a str,
    status: PaymentStatus,
}

impl<'a> From<&'a Payment> for PaymentRow<'a> {
    fn from(payment: &'a Payment) -> Self {
        Self {
            id: payment.id(),
            order_id: &payment.order().id,
            method: payment.method(),
            status: payment.status(),
        }
    }
}

/// Writes stored payments as CSV or as JSON lines.
pub struct PaymentWriter<W: Write> {
    writer: W,
}

impl<W: Write> PaymentWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes a header followed by one row per payment. The header is written even
    /// when there are no payments.
    pub fn write_csv<'a>(
        &mut self,
        payments: impl IntoIterator<Item = &'a Payment>,
    ) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.writer);
        writer.write_record(HEADER)?;
        for payment in payments {
            writer.serialize(PaymentRow::from(payment))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_json_lines<'a>(
        &mut self,
        payments: impl IntoIterator<Item = &'a Payment>,
    ) -> Result<()> {
        for payment in payments {
            serde_json::to_writer(&mut self.writer, &PaymentRow::from(payment))?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
