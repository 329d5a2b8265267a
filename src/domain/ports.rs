use super::payment::Payment;

/// Storage port for payments, keyed by payment id.
///
/// Lookups never fail: a missing payment is `None` or an empty list.
pub trait PaymentRepository {
    /// Inserts the payment, or replaces the stored one with the same id.
    fn save(&mut self, payment: Payment) -> &Payment;
    fn find_by_id(&self, id: &str) -> Option<&Payment>;
    fn find_all(&self) -> Vec<&Payment>;
    fn find_by_order_id(&self, order_id: &str) -> Vec<&Payment>;
}

pub type PaymentRepositoryBox = Box<dyn PaymentRepository>;
pub type PaymentRepositoryFactory = Box<dyn Fn() -> PaymentRepositoryBox>;
