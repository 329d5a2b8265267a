use super::order::Order;
use crate::error::{PaymentError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const VOUCHER_CODE: &str = "voucherCode";
pub const BANK_NAME: &str = "bankName";
pub const REFERENCE_CODE: &str = "referenceCode";

const VOUCHER_PREFIX: &str = "ESHOP";
const VOUCHER_LENGTH: usize = 16;
const VOUCHER_MIN_DIGITS: usize = 8;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Waiting,
    Success,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Success => "SUCCESS",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = PaymentError;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "WAITING" => Ok(Self::Waiting),
            "SUCCESS" => Ok(Self::Success),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(PaymentError::InvalidStatus(other.to_string())),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

/// The validation rule set a payment is checked against.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentMethod {
    Voucher,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Voucher => "VOUCHER",
            Self::BankTransfer => "BANK_TRANSFER",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = PaymentError;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "VOUCHER" => Ok(Self::Voucher),
            "BANK_TRANSFER" => Ok(Self::BankTransfer),
            other => Err(PaymentError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Method-specific fields of a payment, keyed by field name.
///
/// A value of `None` is an explicitly null field. Lookups treat a null field,
/// an empty string, and a missing key the same way wherever presence matters.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct PaymentData(HashMap<String, Option<String>>);

impl PaymentData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Some(value.into()));
    }

    pub fn insert_null(&mut self, key: impl Into<String>) {
        self.0.insert(key.into(), None);
    }

    /// Builder form of [`PaymentData::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value for `key` unless it is missing or null.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Option<String>>> for PaymentData {
    fn from(fields: HashMap<String, Option<String>>) -> Self {
        Self(fields)
    }
}

/// Typed view over a payment's method and data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentDetails<'a> {
    Voucher {
        voucher_code: Option<&'a str>,
    },
    BankTransfer {
        bank_name: Option<&'a str>,
        reference_code: Option<&'a str>,
    },
}

impl<'a> PaymentDetails<'a> {
    pub fn from_parts(method: &str, data: &'a PaymentData) -> Result<Self> {
        let details = match PaymentMethod::try_from(method)? {
            PaymentMethod::Voucher => Self::Voucher {
                voucher_code: data.get(VOUCHER_CODE),
            },
            PaymentMethod::BankTransfer => Self::BankTransfer {
                bank_name: data.get(BANK_NAME),
                reference_code: data.get(REFERENCE_CODE),
            },
        };
        Ok(details)
    }

    pub fn method(&self) -> PaymentMethod {
        match self {
            Self::Voucher { .. } => PaymentMethod::Voucher,
            Self::BankTransfer { .. } => PaymentMethod::BankTransfer,
        }
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Voucher { voucher_code } => voucher_code.is_some_and(is_valid_voucher_code),
            Self::BankTransfer {
                bank_name,
                reference_code,
            } => is_filled(bank_name) && is_filled(reference_code),
        }
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn is_valid_voucher_code(code: &str) -> bool {
    code.chars().count() == VOUCHER_LENGTH
        && code.starts_with(VOUCHER_PREFIX)
        && code.chars().filter(char::is_ascii_digit).count() >= VOUCHER_MIN_DIGITS
}

/// A payment against an order.
///
/// Construction never validates; the method tag is only checked by
/// [`Payment::validate_and_set_status`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Payment {
    id: String,
    order: Arc<Order>,
    method: String,
    payment_data: PaymentData,
    status: PaymentStatus,
}

impl Payment {
    pub fn new(
        id: impl Into<String>,
        order: Arc<Order>,
        method: impl Into<String>,
        payment_data: PaymentData,
    ) -> Self {
        Self::with_status(id, order, method, payment_data, PaymentStatus::Waiting)
    }

    pub fn with_status(
        id: impl Into<String>,
        order: Arc<Order>,
        method: impl Into<String>,
        payment_data: PaymentData,
        status: PaymentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            order,
            method: method.into(),
            payment_data,
            status,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn order(&self) -> &Arc<Order> {
        &self.order
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn payment_data(&self) -> &PaymentData {
        &self.payment_data
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn set_status(&mut self, status: PaymentStatus) {
        self.status = status;
    }

    pub fn details(&self) -> Result<PaymentDetails<'_>> {
        PaymentDetails::from_parts(&self.method, &self.payment_data)
    }

    /// Recomputes the status from the method rules and returns it.
    ///
    /// Fails only for an unsupported method, in which case the status is left as is.
    pub fn validate_and_set_status(&mut self) -> Result<PaymentStatus> {
        let status = if self.details()?.is_valid() {
            PaymentStatus::Success
        } else {
            PaymentStatus::Rejected
        };
        self.status = status;
        Ok(status)
    }
}
