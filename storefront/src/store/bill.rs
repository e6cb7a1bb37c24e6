//! Bill state and reducer
//!
//! A bill exists only after a checkout submission. The summary dialog opens
//! on the `Created` transition; dismissing it clears the open flag but keeps
//! the bill data until a newer submission replaces it.

use shared::models::Bill;

use super::SubmitStatus;

/// Latest bill, submission history, and dialog visibility
#[derive(Debug, Clone, Default)]
pub struct BillState {
    /// Bill from the most recent successful checkout
    pub bill: Option<Bill>,
    /// Past bills, newest first
    pub bills: Vec<Bill>,
    pub status: SubmitStatus,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Whether the summary dialog is showing
    pub summary_open: bool,
}

/// Bill state transitions
#[derive(Debug, Clone)]
pub enum BillEvent {
    CreateStarted,
    CreateSucceeded(Bill),
    CreateFailed(String),
    /// Close the summary dialog; bill data is retained
    SummaryDismissed,
    StatusReset,
}

impl BillState {
    /// Pure transition from the current state and one event to the next state
    pub fn apply(mut self, event: BillEvent) -> Self {
        match event {
            BillEvent::CreateStarted => {
                self.status = SubmitStatus::Loading;
                self.is_loading = true;
            }
            BillEvent::CreateSucceeded(bill) => {
                self.status = SubmitStatus::Created;
                self.bills.insert(0, bill.clone());
                self.bill = Some(bill);
                self.is_loading = false;
                self.summary_open = true;
            }
            BillEvent::CreateFailed(message) => {
                self.status = SubmitStatus::Fail;
                self.error = Some(message);
                self.is_loading = false;
            }
            BillEvent::SummaryDismissed => {
                self.summary_open = false;
            }
            BillEvent::StatusReset => {
                self.status = SubmitStatus::Idle;
                self.error = None;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::BillItem;

    fn bill(id: &str, final_amount: f64, total_discount: f64) -> Bill {
        Bill {
            id: id.into(),
            items: vec![BillItem {
                id: format!("{id}-i1"),
                product_id: "p1".into(),
                quantity: 2,
                discount_amount: total_discount,
                final_price: final_amount,
            }],
            total_discount,
            final_amount,
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_created_opens_summary_and_prepends_history() {
        let state = BillState::default()
            .apply(BillEvent::CreateStarted)
            .apply(BillEvent::CreateSucceeded(bill("b1", 14.0, 6.0)))
            .apply(BillEvent::CreateSucceeded(bill("b2", 30.0, 0.0)));

        assert_eq!(state.status, SubmitStatus::Created);
        assert!(state.summary_open);
        assert_eq!(state.bill.as_ref().unwrap().id, "b2");
        // Newest first
        assert_eq!(state.bills[0].id, "b2");
        assert_eq!(state.bills[1].id, "b1");
    }

    #[test]
    fn test_dismiss_clears_only_the_open_flag() {
        let state = BillState::default()
            .apply(BillEvent::CreateSucceeded(bill("b1", 14.0, 6.0)))
            .apply(BillEvent::SummaryDismissed);

        assert!(!state.summary_open);
        assert!(state.bill.is_some());
        assert_eq!(state.status, SubmitStatus::Created);
    }

    #[test]
    fn test_failed_checkout_keeps_previous_bill() {
        let state = BillState::default()
            .apply(BillEvent::CreateSucceeded(bill("b1", 14.0, 6.0)))
            .apply(BillEvent::CreateFailed("Something went wrong".into()));

        assert_eq!(state.status, SubmitStatus::Fail);
        assert_eq!(state.error.as_deref(), Some("Something went wrong"));
        assert_eq!(state.bill.as_ref().unwrap().id, "b1");
    }
}
