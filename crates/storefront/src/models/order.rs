//! Order records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lubemart_core::{OrderId, OrderStatus};

use super::cart::CartLine;

/// How the customer pays. A closed set; no processor integration behind any
/// of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Upi,
    CashOnDelivery,
}

impl PaymentMethod {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit / Debit Card",
            Self::Upi => "UPI",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// A completed shipping address, captured at checkout.
///
/// Unlike the profile [`Address`](super::user::Address), every field is
/// required: an order cannot ship without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A placed order, embedded in the user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    /// The cart lines as they were at checkout.
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub shipping_address: ShippingAddress,
}

impl Order {
    /// Sum of item quantities, for display badges.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
