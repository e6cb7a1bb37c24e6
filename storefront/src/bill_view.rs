//! Bill summary view model
//!
//! Renders an authoritative, already-discounted bill. Product names come
//! from the catalog by lookup; the bill and the catalog are fetched
//! independently, so a missing product degrades to a sentinel instead of
//! failing the render.

use chrono::{DateTime, Utc};
use shared::models::{Bill, Product};

/// Name shown when the catalog has no entry for a billed product
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Resolve a product name from the catalog, falling back to the sentinel
pub fn resolve_product_name(product_id: &str, catalog: &[Product]) -> String {
    catalog
        .iter()
        .find(|p| p.id == product_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string())
}

/// One display row of the bill summary dialog
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub name: String,
    pub quantity: i64,
    pub final_price: f64,
    pub discount_amount: f64,
}

impl BillRow {
    /// Whether the discount badge is shown for this row
    pub fn has_discount(&self) -> bool {
        self.discount_amount > 0.0
    }
}

/// The bill summary dialog's data
#[derive(Debug, Clone)]
pub struct BillSummary {
    pub rows: Vec<BillRow>,
    /// Pre-discount subtotal, reconstructed as final amount + total discount
    pub display_subtotal: f64,
    pub total_discount: f64,
    pub amount_paid: f64,
    pub created_at: DateTime<Utc>,
}

impl BillSummary {
    /// Build the summary from a backend bill and the current catalog
    pub fn from_bill(bill: &Bill, catalog: &[Product]) -> Self {
        let rows = bill
            .items
            .iter()
            .map(|item| BillRow {
                name: resolve_product_name(&item.product_id, catalog),
                quantity: item.quantity,
                final_price: item.final_price,
                discount_amount: item.discount_amount,
            })
            .collect();

        Self {
            rows,
            display_subtotal: bill.subtotal(),
            total_discount: bill.total_discount,
            amount_paid: bill.final_amount,
            created_at: bill.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::BillItem;

    fn catalog() -> Vec<Product> {
        vec![Product {
            id: "p1".into(),
            name: "Mechanical Keyboard".into(),
            price: 150.0,
            quantity: 5,
            offers: vec![],
            is_active: true,
            image: None,
        }]
    }

    fn bill() -> Bill {
        Bill {
            id: "b1".into(),
            items: vec![
                BillItem {
                    id: "i1".into(),
                    product_id: "p1".into(),
                    quantity: 1,
                    discount_amount: 30.0,
                    final_price: 120.0,
                },
                BillItem {
                    id: "i2".into(),
                    product_id: "deleted".into(),
                    quantity: 2,
                    discount_amount: 0.0,
                    final_price: 10.0,
                },
            ],
            total_discount: 30.0,
            final_amount: 130.0,
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_rows_resolve_names_with_sentinel_fallback() {
        let summary = BillSummary::from_bill(&bill(), &catalog());
        assert_eq!(summary.rows[0].name, "Mechanical Keyboard");
        assert_eq!(summary.rows[1].name, UNKNOWN_PRODUCT);
    }

    #[test]
    fn test_display_subtotal_reconstruction() {
        let summary = BillSummary::from_bill(&bill(), &catalog());
        // finalAmount + totalDiscount
        assert_eq!(summary.display_subtotal, 160.0);
        assert_eq!(summary.amount_paid, 130.0);
        assert_eq!(summary.total_discount, 30.0);
    }

    #[test]
    fn test_discount_badge_only_on_discounted_rows() {
        let summary = BillSummary::from_bill(&bill(), &catalog());
        assert!(summary.rows[0].has_discount());
        assert!(!summary.rows[1].has_discount());
    }

    #[test]
    fn test_resolve_name_never_fails_on_empty_catalog() {
        assert_eq!(resolve_product_name("p1", &[]), UNKNOWN_PRODUCT);
    }
}
