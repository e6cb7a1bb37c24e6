//! Catalog/Offer/Bill store
//!
//! A single process-wide state container replaced wholesale by fetch
//! results. Every mutation is a pure transition `State::apply(self, Event)`;
//! the store only routes events to the owning entity state. Concurrent
//! in-flight fetches commit in completion order (last writer wins) — there
//! is no request serialization or cancellation.

pub mod bill;
pub mod offers;
pub mod products;

pub use bill::{BillEvent, BillState};
pub use offers::{OfferEvent, OffersState};
pub use products::{ProductEvent, ProductsState};

/// Submission/fetch status of an entity state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Created,
    Success,
    Updated,
    Deleted,
    Fail,
}

/// Explicit state container passed through the call graph
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub products: ProductsState,
    pub offers: OffersState,
    pub bill: BillState,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a product event
    pub fn apply_product(&mut self, event: ProductEvent) {
        self.products = std::mem::take(&mut self.products).apply(event);
    }

    /// Apply an offer event
    pub fn apply_offer(&mut self, event: OfferEvent) {
        self.offers = std::mem::take(&mut self.offers).apply(event);
    }

    /// Apply a bill event
    pub fn apply_bill(&mut self, event: BillEvent) {
        self.bill = std::mem::take(&mut self.bill).apply(event);
    }
}
