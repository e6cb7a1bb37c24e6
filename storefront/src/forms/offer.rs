//! Offer creation draft
//!
//! The selected offer type dictates which config fields exist. Switching
//! type is a hard reset of the whole config — no field survives into the
//! new shape, so a percentage value can never ride along inside a
//! flat-amount payload.

use chrono::NaiveDate;
use shared::models::{OfferConfig, OfferCreate, OfferType};
use shared::validation::{
    parse_required_integer, parse_required_number, validate_required_text, MAX_NAME_LEN,
};
use shared::ValidationError;

/// Default campaign priority
const DEFAULT_PRIORITY: i64 = 3;

/// Config fields under edit, one variant per offer type
///
/// Fields are raw input strings; they are parsed and range-checked at
/// validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigDraft {
    FlatAmount {
        discount_amount: String,
    },
    BuyXGetY {
        buy_quantity: String,
        get_quantity: String,
    },
    Percentage {
        percentage: String,
    },
}

impl ConfigDraft {
    /// The empty config shape for an offer type
    pub fn empty_for(offer_type: OfferType) -> Self {
        match offer_type {
            OfferType::FlatAmount => ConfigDraft::FlatAmount {
                discount_amount: String::new(),
            },
            OfferType::BuyXGetY => ConfigDraft::BuyXGetY {
                buy_quantity: String::new(),
                get_quantity: String::new(),
            },
            OfferType::Percentage => ConfigDraft::Percentage {
                percentage: String::new(),
            },
        }
    }
}

/// Offer creation draft mirroring the admin drawer
#[derive(Debug, Clone)]
pub struct OfferDraft {
    pub name: String,
    offer_type: Option<OfferType>,
    pub priority: i64,
    config: Option<ConfigDraft>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl OfferDraft {
    /// New draft; the start date defaults to the day the drawer opened
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            offer_type: None,
            priority: DEFAULT_PRIORITY,
            config: None,
            start_date: today,
            end_date: None,
        }
    }

    /// Currently selected offer type, if any
    pub fn offer_type(&self) -> Option<OfferType> {
        self.offer_type
    }

    /// Current config draft, if a type has been selected
    pub fn config(&self) -> Option<&ConfigDraft> {
        self.config.as_ref()
    }

    /// Mutable access to the config fields for editing
    pub fn config_mut(&mut self) -> Option<&mut ConfigDraft> {
        self.config.as_mut()
    }

    /// Select an offer type, replacing the entire config with that type's
    /// empty shape
    ///
    /// Re-selecting the already active type also resets its fields.
    pub fn select_type(&mut self, offer_type: OfferType) {
        self.offer_type = Some(offer_type);
        self.config = Some(ConfigDraft::empty_for(offer_type));
    }

    /// Whether the submit control is enabled (a type must be chosen)
    pub fn can_submit(&self) -> bool {
        self.offer_type.is_some()
    }

    /// Validate the draft and build the create payload
    ///
    /// Returns every field error at once so the form can render them inline.
    pub fn validate(&self) -> Result<OfferCreate, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = validate_required_text(&self.name, "name", MAX_NAME_LEN) {
            errors.push(e);
        }

        let config = match (&self.offer_type, &self.config) {
            (Some(_), Some(draft)) => match validate_config(draft) {
                Ok(config) => Some(config),
                Err(mut config_errors) => {
                    errors.append(&mut config_errors);
                    None
                }
            },
            _ => {
                errors.push(ValidationError::new("type", "offer type is required"));
                None
            }
        };

        let end_date = match self.end_date {
            Some(end) if end < self.start_date => {
                errors.push(ValidationError::new(
                    "endDate",
                    "end date must not be before start date",
                ));
                None
            }
            Some(end) => Some(end),
            None => {
                errors.push(ValidationError::new("endDate", "end date is required"));
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // Both checked above
        let (config, end_date) = (config.unwrap(), end_date.unwrap());
        Ok(OfferCreate {
            name: self.name.trim().to_string(),
            offer_type: config.offer_type(),
            priority: self.priority,
            config,
            start_date: self.start_date,
            end_date,
        })
    }
}

/// Parse and range-check the config fields of the active type
fn validate_config(draft: &ConfigDraft) -> Result<OfferConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let config = match draft {
        ConfigDraft::FlatAmount { discount_amount } => {
            match parse_required_number(discount_amount, "config.discountAmount") {
                Ok(amount) if amount < 0.0 => {
                    errors.push(ValidationError::new(
                        "config.discountAmount",
                        "discount amount must not be negative",
                    ));
                    None
                }
                Ok(amount) => Some(OfferConfig::FlatAmount {
                    discount_amount: amount,
                }),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        }
        ConfigDraft::BuyXGetY {
            buy_quantity,
            get_quantity,
        } => {
            let buy = parse_bundle_quantity(buy_quantity, "config.buyQuantity", &mut errors);
            let get = parse_bundle_quantity(get_quantity, "config.getQuantity", &mut errors);
            match (buy, get) {
                (Some(buy_quantity), Some(get_quantity)) => Some(OfferConfig::BuyXGetY {
                    buy_quantity,
                    get_quantity,
                }),
                _ => None,
            }
        }
        ConfigDraft::Percentage { percentage } => {
            match parse_required_number(percentage, "config.percentage") {
                Ok(pct) if pct <= 0.0 || pct > 100.0 => {
                    errors.push(ValidationError::new(
                        "config.percentage",
                        "percentage must be between 0 and 100",
                    ));
                    None
                }
                Ok(pct) => Some(OfferConfig::Percentage { percentage: pct }),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        }
    };

    match config {
        Some(config) if errors.is_empty() => Ok(config),
        _ => Err(errors),
    }
}

/// Parse a bundle quantity field: integer, at least 1
fn parse_bundle_quantity(
    raw: &str,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<u32> {
    match parse_required_integer(raw, field) {
        Ok(qty) if qty >= 1 => Some(qty as u32),
        Ok(_) => {
            errors.push(ValidationError::new(field, format!("{field} must be at least 1")));
            None
        }
        Err(e) => {
            errors.push(e);
            None
        }
    }
}
