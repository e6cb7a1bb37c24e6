//! Product creation draft

use shared::models::ProductCreate;
use shared::validation::{
    parse_required_integer, parse_required_number, validate_optional_text, MAX_URL_LEN,
};
use shared::ValidationError;

/// Product name bounds (form-level, tighter than the generic text limit)
const MIN_PRODUCT_NAME_LEN: usize = 3;
const MAX_PRODUCT_NAME_LEN: usize = 50;

/// Product creation draft mirroring the admin drawer
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    /// Raw price input
    pub price: String,
    /// Raw stock quantity input
    pub quantity: String,
    /// Linked offer ids, toggled from the offer list
    pub offers: Vec<String>,
    /// Uploaded image reference, if any
    pub image: Option<String>,
}

impl ProductDraft {
    /// New draft with a single unit of stock preselected
    pub fn new() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            quantity: "1".into(),
            offers: Vec::new(),
            image: None,
        }
    }

    /// Toggle an offer link on or off
    pub fn toggle_offer(&mut self, offer_id: &str) {
        if let Some(pos) = self.offers.iter().position(|id| id == offer_id) {
            self.offers.remove(pos);
        } else {
            self.offers.push(offer_id.to_string());
        }
    }

    /// Whether the draft would pass validation (gates the submit control)
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate the draft and build the create payload
    ///
    /// Returns every field error at once so the form can render them inline.
    pub fn validate(&self) -> Result<ProductCreate, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new("name", "Product name is required"));
        } else if name.len() < MIN_PRODUCT_NAME_LEN {
            errors.push(ValidationError::new("name", "Name is too short"));
        } else if name.len() > MAX_PRODUCT_NAME_LEN {
            errors.push(ValidationError::new("name", "Name is too long"));
        }

        let price = match parse_required_number(&self.price, "price") {
            Ok(price) if price <= 0.0 => {
                errors.push(ValidationError::new(
                    "price",
                    "Price must be greater than zero",
                ));
                None
            }
            Ok(price) => Some(price),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let quantity = match parse_required_integer(&self.quantity, "quantity") {
            Ok(qty) if qty < 1 => {
                errors.push(ValidationError::new("quantity", "Minimum 1 unit required"));
                None
            }
            Ok(qty) => Some(qty),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        if let Err(e) = validate_optional_text(&self.image, "image", MAX_URL_LEN) {
            errors.push(e);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductCreate {
            name: name.to_string(),
            price: price.unwrap(),
            quantity: quantity.unwrap(),
            offers: self.offers.clone(),
            image: self.image.clone(),
        })
    }
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::new()
    }
}
