/// A line item of an order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// The order a payment settles.
///
/// Payments only read the order, they hold it behind an `Arc` and never mutate it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Order {
    pub id: String,
    pub products: Vec<Product>,
    /// Creation time in epoch milliseconds.
    pub order_time: i64,
    pub author: String,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        products: Vec<Product>,
        order_time: i64,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            products,
            order_time,
            author: author.into(),
        }
    }

    /// An order known only by its id, as referenced from a payments file.
    pub fn reference(id: impl Into<String>) -> Self {
        Self::new(id, Vec::new(), 0, "")
    }
}
