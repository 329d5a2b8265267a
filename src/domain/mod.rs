//! Domain model: orders, payments, and the storage port payments are kept behind.

pub mod order;
pub mod payment;
pub mod ports;
