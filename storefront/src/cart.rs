//! Cart reconciliation model
//!
//! The cart stores only (product id, quantity) pairs. Priced line items are
//! derived on demand against the separately fetched catalog; a cart entry
//! whose product no longer exists in the catalog simply drops out of the
//! derived view. Totals are pure recomputations, never cached.

use shared::models::{BillLine, Product};

/// One cart entry: product reference and quantity (>= 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub product_id: String,
    pub quantity: u32,
}

/// Client-local, ephemeral cart
///
/// Holds at most one entry per product id; insertion order is preserved for
/// display.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one unit of a product, merging into an existing entry
    pub fn add(&mut self, product_id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
            entry.quantity += 1;
        } else {
            self.entries.push(CartEntry {
                product_id: product_id.to_string(),
                quantity: 1,
            });
        }
    }

    /// Adjust an entry's quantity by `delta`, flooring at zero
    ///
    /// Entries reaching zero are removed outright; the cart never holds a
    /// zero-quantity entry.
    pub fn update_quantity(&mut self, product_id: &str, delta: i64) {
        for entry in &mut self.entries {
            if entry.product_id == product_id {
                entry.quantity = (entry.quantity as i64 + delta).max(0) as u32;
            }
        }
        self.entries.retain(|e| e.quantity > 0);
    }

    /// Total number of units across all entries
    pub fn count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The minimal checkout payload: one line per entry
    pub fn checkout_lines(&self) -> Vec<BillLine> {
        self.entries
            .iter()
            .map(|e| BillLine {
                product_id: e.product_id.clone(),
                qty: e.quantity,
            })
            .collect()
    }
}

/// Cart entry joined with its catalog snapshot at render time
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedCartLine {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    pub quantity: u32,
}

impl DetailedCartLine {
    /// Price x quantity for this line
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Join cart entries with the current catalog
///
/// Entries whose product id is absent from the catalog are dropped, not an
/// error: the catalog may be stale relative to the cart (or the product was
/// deleted). Insertion order of resolving entries is preserved.
pub fn derive_detailed_cart(cart: &Cart, catalog: &[Product]) -> Vec<DetailedCartLine> {
    cart.entries()
        .iter()
        .filter_map(|entry| {
            let product = catalog.iter().find(|p| p.id == entry.product_id)?;
            Some(DetailedCartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity: entry.quantity,
            })
        })
        .collect()
}

/// Sum of line totals over a derived cart
pub fn cart_total(lines: &[DetailedCartLine]) -> f64 {
    lines.iter().map(DetailedCartLine::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            quantity: 100,
            offers: vec![],
            is_active: true,
            image: None,
        }
    }

    #[test]
    fn test_add_merges_on_existing_id() {
        let mut cart = Cart::new();
        cart.add("p1");
        cart.add("p2");
        cart.add("p1");

        assert_eq!(cart.entries().len(), 2);
        assert_eq!(cart.entries()[0].quantity, 2);
        // Insertion order preserved
        assert_eq!(cart.entries()[0].product_id, "p1");
        assert_eq!(cart.entries()[1].product_id, "p2");
    }

    #[test]
    fn test_update_quantity_floors_at_zero_and_removes() {
        let mut cart = Cart::new();
        cart.add("p1");
        cart.add("p1");
        cart.update_quantity("p1", -1);
        assert_eq!(cart.entries()[0].quantity, 1);

        // Going to (or past) zero removes the entry entirely
        cart.update_quantity("p1", -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_by_negative_current_qty_then_derive_omits() {
        let mut cart = Cart::new();
        cart.add("p1");
        cart.add("p1");
        cart.add("p1");
        cart.update_quantity("p1", -(cart.entries()[0].quantity as i64));

        let catalog = vec![product("p1", "Mouse", 25.0)];
        assert!(derive_detailed_cart(&cart, &catalog).is_empty());
    }

    #[test]
    fn test_derive_drops_unknown_products_preserving_order() {
        let mut cart = Cart::new();
        cart.add("p1");
        cart.add("gone");
        cart.add("p2");

        let catalog = vec![product("p2", "Keyboard", 150.0), product("p1", "Mouse", 25.0)];
        let lines = derive_detailed_cart(&cart, &catalog);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_id, "p1");
        assert_eq!(lines[1].product_id, "p2");
    }

    #[test]
    fn test_totals_scenario() {
        // P1 (price 10) x2 and P2 (price 5) x1 -> total 25, count 3
        let mut cart = Cart::new();
        cart.add("p1");
        cart.add("p1");
        cart.add("p2");

        let catalog = vec![product("p1", "A", 10.0), product("p2", "B", 5.0)];
        let lines = derive_detailed_cart(&cart, &catalog);

        assert_eq!(cart_total(&lines), 25.0);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_cart_total_is_additive_over_disjoint_carts() {
        let catalog = vec![
            product("p1", "A", 10.0),
            product("p2", "B", 5.0),
            product("p3", "C", 2.5),
        ];

        let mut c1 = Cart::new();
        c1.add("p1");
        c1.add("p1");

        let mut c2 = Cart::new();
        c2.add("p2");
        c2.add("p3");

        let mut merged = Cart::new();
        for cart in [&c1, &c2] {
            for entry in cart.entries() {
                for _ in 0..entry.quantity {
                    merged.add(&entry.product_id);
                }
            }
        }

        let total = |c: &Cart| cart_total(&derive_detailed_cart(c, &catalog));
        assert_eq!(total(&merged), total(&c1) + total(&c2));
    }

    #[test]
    fn test_checkout_lines_minimal_payload() {
        let mut cart = Cart::new();
        cart.add("p1");
        cart.add("p1");
        cart.add("p2");

        let lines = cart.checkout_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_id, "p1");
        assert_eq!(lines[0].qty, 2);
        assert_eq!(lines[1].qty, 1);
    }
}
