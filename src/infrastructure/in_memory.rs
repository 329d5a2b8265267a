use crate::domain::payment::Payment;
use crate::domain::ports::PaymentRepository;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// An in-memory payment repository.
///
/// Uses a `BTreeMap<String, Payment>` keyed by payment id, so listings come back
/// in ascending id order regardless of how often entries were replaced.
/// Not synchronised; callers sharing one across threads must wrap it themselves.
#[derive(Default, Debug, Clone)]
pub struct InMemoryPaymentRepository {
    payments: BTreeMap<String, Payment>,
}

impl InMemoryPaymentRepository {
    /// Creates a new, empty in-memory payment repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

impl PaymentRepository for InMemoryPaymentRepository {
    fn save(&mut self, payment: Payment) -> &Payment {
        match self.payments.entry(payment.id().to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(payment);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(payment),
        }
    }

    fn find_by_id(&self, id: &str) -> Option<&Payment> {
        self.payments.get(id)
    }

    fn find_all(&self) -> Vec<&Payment> {
        self.payments.values().collect()
    }

    fn find_by_order_id(&self, order_id: &str) -> Vec<&Payment> {
        self.payments
            .values()
            .filter(|payment| payment.order().id == order_id)
            .collect()
    }
}
