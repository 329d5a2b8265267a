//! CSV adapters: payment requests in, stored payments out.

pub mod payment_reader;
pub mod payment_writer;
