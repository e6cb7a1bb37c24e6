//! Offer catalog state and reducer

use shared::models::Offer;

use super::SubmitStatus;

/// Cached offer list plus the status of the last offer operation
#[derive(Debug, Clone, Default)]
pub struct OffersState {
    pub offers: Vec<Offer>,
    pub status: SubmitStatus,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Offer state transitions
#[derive(Debug, Clone)]
pub enum OfferEvent {
    CreateStarted,
    CreateSucceeded(Offer),
    /// A list fetch completed; replaces the cached offers wholesale
    ListLoaded(Vec<Offer>),
    Updated(Offer),
    Deleted(String),
    Failed(String),
    StatusReset,
}

impl OffersState {
    /// Pure transition from the current state and one event to the next state
    pub fn apply(mut self, event: OfferEvent) -> Self {
        match event {
            OfferEvent::CreateStarted => {
                self.status = SubmitStatus::Loading;
                self.is_loading = true;
            }
            OfferEvent::CreateSucceeded(offer) => {
                self.status = SubmitStatus::Created;
                self.offers.push(offer);
                self.is_loading = false;
            }
            OfferEvent::ListLoaded(offers) => {
                self.status = SubmitStatus::Success;
                self.offers = offers;
                self.is_loading = false;
            }
            OfferEvent::Updated(offer) => {
                self.status = SubmitStatus::Updated;
                if let Some(existing) = self.offers.iter_mut().find(|o| o.id == offer.id) {
                    *existing = offer;
                }
                self.is_loading = false;
            }
            OfferEvent::Deleted(id) => {
                self.status = SubmitStatus::Deleted;
                self.offers.retain(|o| o.id != id);
                self.is_loading = false;
            }
            OfferEvent::Failed(message) => {
                self.status = SubmitStatus::Fail;
                self.error = Some(message);
                self.is_loading = false;
            }
            OfferEvent::StatusReset => {
                self.status = SubmitStatus::Idle;
                self.error = None;
            }
        }
        self
    }
}
