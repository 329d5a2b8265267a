use crate::domain::order::Order;
use crate::domain::payment::{Payment, PaymentData, PaymentStatus};
use crate::domain::ports::PaymentRepositoryBox;
use crate::error::{PaymentError, Result};
use std::sync::Arc;

/// Registers, updates and looks up payments.
///
/// `PaymentService` owns its repository. Payments handed out are copies; use
/// [`PaymentService::set_status`] to change a stored payment.
pub struct PaymentService {
    repository: PaymentRepositoryBox,
}

impl PaymentService {
    /// Creates a new `PaymentService` backed by `repository`.
    pub fn new(repository: PaymentRepositoryBox) -> Self {
        Self { repository }
    }

    /// Creates a payment, validates it and stores the outcome.
    ///
    /// A payment with an unsupported method is not stored.
    pub fn add_payment(
        &mut self,
        id: impl Into<String>,
        order: Arc<Order>,
        method: impl Into<String>,
        payment_data: PaymentData,
    ) -> Result<Payment> {
        let mut payment = Payment::new(id, order, method, payment_data);

        if let Err(e) = payment.validate_and_set_status() {
            tracing::debug!(
                payment_id = payment.id(),
                method = payment.method(),
                error = %e,
                "payment not stored"
            );
            return Err(e);
        }

        tracing::info!(
            payment_id = payment.id(),
            order_id = %payment.order().id,
            method = payment.method(),
            status = %payment.status(),
            "payment stored"
        );
        Ok(self.repository.save(payment).clone())
    }

    /// Overwrites the status of a stored payment.
    pub fn set_status(&mut self, id: &str, status: PaymentStatus) -> Result<Payment> {
        let mut payment = self
            .repository
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| PaymentError::PaymentNotFound(id.to_string()))?;

        tracing::debug!(
            payment_id = id,
            from = %payment.status(),
            to = %status,
            "payment status set"
        );
        payment.set_status(status);
        Ok(self.repository.save(payment).clone())
    }

    pub fn get_payment(&self, id: &str) -> Option<Payment> {
        self.repository.find_by_id(id).cloned()
    }

    pub fn get_all_payments(&self) -> Vec<Payment> {
        self.repository.find_all().into_iter().cloned().collect()
    }

    pub fn get_payments_for_order(&self, order_id: &str) -> Vec<Payment> {
        self.repository
            .find_by_order_id(order_id)
            .into_iter()
            .cloned()
            .collect()
    }
}
