//! Typed endpoint methods per backend resource
//!
//! Endpoint paths mirror the backend contract: list is a GET on the resource
//! root, create a POST, and update/delete are PUTs on `update/:id` and
//! `delete/:id` (delete is a soft delete carrying `{"isDeleted": true}`).
//! The update/delete endpoints are part of the contract but not exercised by
//! the storefront flows.

use serde::Deserialize;
use shared::models::{
    Bill, BillLine, Offer, OfferCreate, OfferUpdate, Product, ProductCreate, ProductUpdate,
    SoftDelete,
};

use crate::{ClientResult, HttpClient};

/// Response of the product image upload endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUpload {
    /// Stored image reference, linked onto a product at creation time
    #[serde(alias = "path")]
    pub url: String,
}

impl HttpClient {
    // ========== Offer API ==========

    /// List all offers
    pub async fn list_offers(&self) -> ClientResult<Vec<Offer>> {
        self.get("offers").await
    }

    /// Create an offer
    pub async fn create_offer(&self, payload: &OfferCreate) -> ClientResult<Offer> {
        self.post("offers", payload).await
    }

    /// Update an offer
    pub async fn update_offer(&self, id: &str, payload: &OfferUpdate) -> ClientResult<Offer> {
        self.put(&format!("offers/update/{id}"), payload).await
    }

    /// Soft-delete an offer
    pub async fn delete_offer(&self, id: &str) -> ClientResult<Offer> {
        self.put(&format!("offers/delete/{id}"), &SoftDelete::default())
            .await
    }

    // ========== Product API ==========

    /// List all products
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get("products").await
    }

    /// Create a product
    pub async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.post("products", payload).await
    }

    /// Update a product
    pub async fn update_product(&self, id: &str, payload: &ProductUpdate) -> ClientResult<Product> {
        self.put(&format!("products/update/{id}"), payload).await
    }

    /// Soft-delete a product
    pub async fn delete_product(&self, id: &str) -> ClientResult<Product> {
        self.put(&format!("products/delete/{id}"), &SoftDelete::default())
            .await
    }

    /// Upload a product image (multipart field "image")
    pub async fn upload_product_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<ImageUpload> {
        self.post_file("products/file", "image", filename, bytes)
            .await
    }

    // ========== Bill API ==========

    /// Submit a checkout and receive the computed bill
    pub async fn create_bill(&self, lines: &[BillLine]) -> ClientResult<Bill> {
        self.post("bill", &lines).await
    }
}
