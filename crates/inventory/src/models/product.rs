//! Product domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{Price, ProductId};

/// A tracked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID. Immutable once created.
    pub id: ProductId,
    /// Display name. Duplicate names across products are allowed.
    pub name: String,
    /// Free-text category used for filtering.
    pub category: String,
    /// Current on-hand stock, counted in `unit`s.
    pub stock: u32,
    /// Unit label (e.g. "pcs", "kg").
    pub unit: String,
    /// Reorder threshold; stock at or below this level counts as low.
    pub min_stock: u32,
    /// Per-unit price.
    pub price: Price,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating or replacing a product.
///
/// An edit replaces every mutable field, so create and update share one
/// input shape; `id` and `created_at` are never caller-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    /// Display name.
    pub name: String,
    /// Free-text category.
    pub category: String,
    /// On-hand stock.
    pub stock: u32,
    /// Unit label.
    pub unit: String,
    /// Reorder threshold.
    pub min_stock: u32,
    /// Per-unit price.
    pub price: Price,
}

/// Stock level classification for a single product.
///
/// This is the badge shown next to a product. It differs from the
/// low-stock dashboard metric in one way: the metric counts exhausted
/// products as low, the badge reports them as [`StockStatus::Out`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Stock above the reorder threshold.
    Available,
    /// Stock at or below the reorder threshold, but not exhausted.
    Low,
    /// No stock on hand.
    Out,
}

impl Product {
    /// Build a new product from caller input with a fresh ID and the
    /// current timestamp.
    pub(crate) fn new(input: ProductInput) -> Self {
        Self {
            id: ProductId::generate(),
            name: input.name,
            category: input.category,
            stock: input.stock,
            unit: input.unit,
            min_stock: input.min_stock,
            price: input.price,
            created_at: Utc::now(),
        }
    }

    /// Replace every mutable field from `input`, keeping `id` and
    /// `created_at`.
    pub(crate) fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.category = input.category;
        self.stock = input.stock;
        self.unit = input.unit;
        self.min_stock = input.min_stock;
        self.price = input.price;
    }

    /// Classify current stock against the reorder threshold.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        if self.stock == 0 {
            StockStatus::Out
        } else if self.stock <= self.min_stock {
            StockStatus::Low
        } else {
            StockStatus::Available
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn input(stock: u32, min_stock: u32) -> ProductInput {
        ProductInput {
            name: "Kopi".to_string(),
            category: "Minuman".to_string(),
            stock,
            unit: "pcs".to_string(),
            min_stock,
            price: Price::new(Decimal::from(1000)).unwrap(),
        }
    }

    #[test]
    fn test_new_assigns_id_and_timestamp() {
        let a = Product::new(input(5, 2));
        let b = Product::new(input(5, 2));
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Kopi");
        assert_eq!(a.stock, 5);
    }

    #[test]
    fn test_apply_preserves_id_and_created_at() {
        let mut product = Product::new(input(5, 2));
        let id = product.id;
        let created_at = product.created_at;

        let mut replacement = input(9, 3);
        replacement.name = "Kopi Hitam".to_string();
        product.apply(replacement);

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.name, "Kopi Hitam");
        assert_eq!(product.stock, 9);
        assert_eq!(product.min_stock, 3);
    }

    #[test]
    fn test_stock_status_out() {
        let product = Product::new(input(0, 0));
        assert_eq!(product.stock_status(), StockStatus::Out);
    }

    #[test]
    fn test_stock_status_low() {
        let product = Product::new(input(2, 2));
        assert_eq!(product.stock_status(), StockStatus::Low);
    }

    #[test]
    fn test_stock_status_available() {
        let product = Product::new(input(3, 2));
        assert_eq!(product.stock_status(), StockStatus::Available);
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = Product::new(input(5, 2));
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
