//! Product Model

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Product entity
///
/// `offers` holds linked offer ids; the offer entities are resolved by a
/// catalog join at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Price in currency units, >= 0
    pub price: f64,
    /// Units in stock, >= 0
    pub quantity: i64,
    /// Linked offer references (String IDs)
    #[serde(default)]
    pub offers: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub offers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape() {
        let json = r#"{
            "_id": "p1",
            "name": "Mechanical Keyboard",
            "price": 150.0,
            "quantity": 12,
            "offers": ["o1", "o2"],
            "isActive": true,
            "image": "/uploads/kbd.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.price, 150.0);
        assert_eq!(product.offers, vec!["o1", "o2"]);
        assert_eq!(product.image.as_deref(), Some("/uploads/kbd.png"));
    }

    #[test]
    fn test_product_tolerates_absent_optionals() {
        // Catalog entries created before offers/images existed
        let json = r#"{"_id": "p2", "name": "Mouse", "price": 25.0, "quantity": 3}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.offers.is_empty());
        assert!(product.is_active);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_create_payload_omits_missing_image() {
        let payload = ProductCreate {
            name: "Mouse".into(),
            price: 25.0,
            quantity: 3,
            offers: vec![],
            image: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["quantity"], 3);
    }
}
