//! Bill Model
//!
//! A bill is computed entirely by the backend at checkout; the client only
//! renders it. Each item's `final_price` already reflects applied discounts,
//! and `final_amount + total_discount` reconstructs the pre-discount
//! subtotal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One billed line, discounts already applied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_id: String,
    pub quantity: i64,
    pub discount_amount: f64,
    pub final_price: f64,
}

/// Bill entity (backend-computed, authoritative)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(rename = "_id")]
    pub id: String,
    pub items: Vec<BillItem>,
    pub total_discount: f64,
    pub final_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    /// Pre-discount subtotal, reconstructed for display.
    pub fn subtotal(&self) -> f64 {
        self.final_amount + self.total_discount
    }
}

/// Checkout submission line: the minimal (product, quantity) pair.
///
/// The backend resolves prices and discounts itself; nothing else is sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillLine {
    #[serde(rename = "_id")]
    pub product_id: String,
    pub qty: u32,
}
