//! Product catalog state and reducer

use shared::models::Product;

use super::SubmitStatus;

/// Cached product catalog plus the status of the last product operation
#[derive(Debug, Clone, Default)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub status: SubmitStatus,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Product state transitions
#[derive(Debug, Clone)]
pub enum ProductEvent {
    /// A create submission went out
    CreateStarted,
    /// The backend echoed the created product
    CreateSucceeded(Product),
    /// A list fetch completed; replaces the catalog wholesale
    ListLoaded(Vec<Product>),
    /// The backend echoed an updated product (contract-only endpoint)
    Updated(Product),
    /// A product was soft-deleted (contract-only endpoint)
    Deleted(String),
    /// Any product request failed
    Failed(String),
    /// Clear status and error back to idle
    StatusReset,
}

impl ProductsState {
    /// Pure transition from the current state and one event to the next state
    pub fn apply(mut self, event: ProductEvent) -> Self {
        match event {
            ProductEvent::CreateStarted => {
                self.status = SubmitStatus::Loading;
                self.is_loading = true;
            }
            ProductEvent::CreateSucceeded(product) => {
                self.status = SubmitStatus::Created;
                self.products.push(product);
                self.is_loading = false;
            }
            ProductEvent::ListLoaded(products) => {
                self.status = SubmitStatus::Success;
                self.products = products;
                self.is_loading = false;
            }
            ProductEvent::Updated(product) => {
                self.status = SubmitStatus::Updated;
                if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
                    *existing = product;
                }
                self.is_loading = false;
            }
            ProductEvent::Deleted(id) => {
                self.status = SubmitStatus::Deleted;
                self.products.retain(|p| p.id != id);
                self.is_loading = false;
            }
            ProductEvent::Failed(message) => {
                self.status = SubmitStatus::Fail;
                self.error = Some(message);
                self.is_loading = false;
            }
            ProductEvent::StatusReset => {
                self.status = SubmitStatus::Idle;
                self.error = None;
            }
        }
        self
    }
}
