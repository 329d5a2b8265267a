//! Application layer orchestrating payment intake.
//!
//! `PaymentService` is the entry point callers use to register payments: it
//! validates each one against its method rules and keeps the result in the
//! repository it owns.

pub mod service;
