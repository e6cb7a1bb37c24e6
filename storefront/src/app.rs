//! Storefront flows
//!
//! Glue between the REST client and the store: each flow makes one request
//! and applies the matching event. Requests are independent and never
//! queued or cancelled; whichever response lands last owns the cache.

use bodega_client::{ClientConfig, ClientError, HttpClient};
use shared::ValidationError;
use thiserror::Error;

use crate::cart::Cart;
use crate::forms::{OfferDraft, ProductDraft};
use crate::store::{BillEvent, OfferEvent, ProductEvent, Store};

/// Flow error type
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A form draft failed validation; nothing was sent
    #[error("validation failed ({} field(s))", .0.len())]
    Validation(Vec<ValidationError>),

    /// The service call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Checkout requires a non-empty cart
    #[error("cart is empty")]
    EmptyCart,
}

/// Storefront application: the store plus the client that feeds it
#[derive(Debug)]
pub struct Storefront {
    client: HttpClient,
    pub store: Store,
}

impl Storefront {
    /// Create a storefront over an existing client
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            store: Store::new(),
        }
    }

    /// Create a storefront from environment configuration
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env().build_http_client())
    }

    /// Refresh the product catalog
    pub async fn refresh_products(&mut self) -> Result<(), StorefrontError> {
        match self.client.list_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "Product catalog refreshed");
                self.store.apply_product(ProductEvent::ListLoaded(products));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Product list fetch failed: {e}");
                self.store.apply_product(ProductEvent::Failed(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Refresh the offer list
    pub async fn refresh_offers(&mut self) -> Result<(), StorefrontError> {
        match self.client.list_offers().await {
            Ok(offers) => {
                tracing::info!(count = offers.len(), "Offer list refreshed");
                self.store.apply_offer(OfferEvent::ListLoaded(offers));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Offer list fetch failed: {e}");
                self.store.apply_offer(OfferEvent::Failed(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Validate and submit an offer draft
    ///
    /// An invalid draft never reaches the network.
    pub async fn submit_offer(&mut self, draft: &OfferDraft) -> Result<(), StorefrontError> {
        let payload = draft.validate().map_err(StorefrontError::Validation)?;

        self.store.apply_offer(OfferEvent::CreateStarted);
        match self.client.create_offer(&payload).await {
            Ok(offer) => {
                tracing::info!(id = %offer.id, "Offer created");
                self.store.apply_offer(OfferEvent::CreateSucceeded(offer));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Offer creation failed: {e}");
                self.store.apply_offer(OfferEvent::Failed(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Validate and submit a product draft
    pub async fn submit_product(&mut self, draft: &ProductDraft) -> Result<(), StorefrontError> {
        let payload = draft.validate().map_err(StorefrontError::Validation)?;

        self.store.apply_product(ProductEvent::CreateStarted);
        match self.client.create_product(&payload).await {
            Ok(product) => {
                tracing::info!(id = %product.id, "Product created");
                self.store.apply_product(ProductEvent::CreateSucceeded(product));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Product creation failed: {e}");
                self.store.apply_product(ProductEvent::Failed(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Upload a product image, returning the stored reference for the draft
    pub async fn upload_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorefrontError> {
        let upload = self.client.upload_product_image(filename, bytes).await?;
        Ok(upload.url)
    }

    /// Submit the cart as a checkout
    ///
    /// Sends only the minimal (product id, quantity) pairs; the backend
    /// applies discounts and computes the bill. The cart is cleared on a
    /// successful submission, and the bill summary opens via the reducer.
    /// A failed submission keeps the cart for manual resubmission.
    pub async fn checkout(&mut self, cart: &mut Cart) -> Result<(), StorefrontError> {
        if cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let lines = cart.checkout_lines();
        self.store.apply_bill(BillEvent::CreateStarted);
        match self.client.create_bill(&lines).await {
            Ok(bill) => {
                tracing::info!(id = %bill.id, amount = bill.final_amount, "Bill created");
                cart.clear();
                self.store.apply_bill(BillEvent::CreateSucceeded(bill));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Checkout failed: {e}");
                self.store.apply_bill(BillEvent::CreateFailed(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Close the bill summary dialog; the bill data stays in the store
    pub fn dismiss_bill_summary(&mut self) {
        self.store.apply_bill(BillEvent::SummaryDismissed);
    }
}
