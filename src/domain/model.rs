use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line item within an order. Value object: no identity,
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Order lifecycle status. One-way: `Created` -> `Canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "CREATED")]
    Created,
    #[serde(rename = "CANCELED")]
    Canceled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchase record composed of line items with a lifecycle status.
/// Identifiers are caller-supplied; this crate never generates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self {
            id: id.into(),
            items,
            status: OrderStatus::Created,
            created_at: Utc::now(),
            canceled_at: None,
        }
    }

    /// Sum of `quantity * price` over all items. Computed on demand, never cached.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn is_canceled(&self) -> bool {
        self.status == OrderStatus::Canceled
    }

    /// Marks the order canceled and stamps the cancellation time.
    pub fn cancel(&mut self) {
        self.status = OrderStatus::Canceled;
        self.canceled_at = Some(Utc::now());
    }
}
