//! Client-side discount preview
//!
//! Optimistic price preview for the product detail page. Arithmetic runs on
//! integer cents to keep display values stable; the backend remains the only
//! authority on actual billing.

use shared::models::{Offer, OfferConfig};

/// Convert currency units to cents (rounded)
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Convert cents back to currency units
pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Preview the final price of a product under a selected offer
///
/// Percentage and flat-amount offers adjust the shown price, floored at
/// zero. Bundling offers leave the unit price unchanged — their value only
/// materializes in the backend-computed bill.
pub fn preview_price(price: f64, offer: &Offer) -> f64 {
    let cents = to_cents(price);
    let discounted = match &offer.config {
        OfferConfig::Percentage { percentage } => {
            (cents as f64 * (1.0 - percentage / 100.0)).round() as i64
        }
        OfferConfig::FlatAmount { discount_amount } => {
            cents.saturating_sub(to_cents(*discount_amount))
        }
        OfferConfig::BuyXGetY { .. } => cents,
    };
    from_cents(discounted.max(0))
}

/// Format a price for display
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::OfferType;

    fn offer(offer_type: OfferType, config: OfferConfig) -> Offer {
        Offer {
            id: "o1".into(),
            name: "Summer Sale".into(),
            offer_type,
            priority: 3,
            config,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            is_active: true,
        }
    }

    #[test]
    fn test_percentage_preview() {
        // 20% off a $150 item previews at $120
        let offer = offer(
            OfferType::Percentage,
            OfferConfig::Percentage { percentage: 20.0 },
        );
        assert_eq!(preview_price(150.0, &offer), 120.0);
    }

    #[test]
    fn test_flat_amount_preview_floors_at_zero() {
        let offer = offer(
            OfferType::FlatAmount,
            OfferConfig::FlatAmount {
                discount_amount: 30.0,
            },
        );
        assert_eq!(preview_price(150.0, &offer), 120.0);
        assert_eq!(preview_price(20.0, &offer), 0.0);
    }

    #[test]
    fn test_bundle_preview_leaves_price_unchanged() {
        let offer = offer(
            OfferType::BuyXGetY,
            OfferConfig::BuyXGetY {
                buy_quantity: 2,
                get_quantity: 1,
            },
        );
        assert_eq!(preview_price(150.0, &offer), 150.0);
    }

    #[test]
    fn test_cents_rounding() {
        let offer = offer(
            OfferType::Percentage,
            OfferConfig::Percentage { percentage: 33.0 },
        );
        // 33% off $9.99 = $6.6933 -> rounds to $6.69
        assert_eq!(preview_price(9.99, &offer), 6.69);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(120.0), "$120.00");
    }
}
