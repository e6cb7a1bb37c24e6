//! Offer Model
//!
//! A promotional offer carries a type-tagged configuration: the `type` field
//! fully determines which keys appear under `config` on the wire. Modeling
//! the config as a sum type makes a mixed-shape payload unrepresentable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_priority() -> i64 {
    3
}

/// Offer type enum
///
/// Wire values are the backend's historical tags; `QUANTITY` names the
/// flat-amount discount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferType {
    #[serde(rename = "QUANTITY")]
    FlatAmount,
    BuyXGetY,
    Percentage,
}

/// Type-specific offer configuration
///
/// Serialized untagged: the sibling `type` field on [`Offer`] is the
/// discriminant, so `config` is a bare object with exactly the keys of the
/// active variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OfferConfig {
    /// Subtract a fixed currency amount
    #[serde(rename_all = "camelCase")]
    FlatAmount { discount_amount: f64 },
    /// Promotional bundling rule
    #[serde(rename_all = "camelCase")]
    BuyXGetY { buy_quantity: u32, get_quantity: u32 },
    /// Multiplicative discount, percentage in (0, 100]
    Percentage { percentage: f64 },
}

impl OfferConfig {
    /// The offer type this config shape belongs to
    pub fn offer_type(&self) -> OfferType {
        match self {
            OfferConfig::FlatAmount { .. } => OfferType::FlatAmount,
            OfferConfig::BuyXGetY { .. } => OfferType::BuyXGetY,
            OfferConfig::Percentage { .. } => OfferType::Percentage,
        }
    }
}

/// Offer entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    #[serde(default = "default_priority")]
    pub priority: i64,
    pub config: OfferConfig,
    /// Validity window start (inclusive)
    pub start_date: NaiveDate,
    /// Validity window end (inclusive)
    pub end_date: NaiveDate,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Offer {
    /// Whether the config variant agrees with the declared offer type.
    ///
    /// Backend echoes are not re-validated field by field, but a mismatched
    /// pair would mean the two were edited independently upstream.
    pub fn config_matches_type(&self) -> bool {
        self.config.offer_type() == self.offer_type
    }

    /// Whether `date` falls inside the inclusive validity window.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub priority: i64,
    pub config: OfferConfig,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Update offer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub offer_type: Option<OfferType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<OfferConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
