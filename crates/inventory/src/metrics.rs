//! Derived dashboard metrics.

use rust_decimal::Decimal;

use crate::models::Product;

/// Aggregates shown on the dashboard.
///
/// A pure snapshot over the product collection, recomputed on every call;
/// there is no caching or incremental maintenance to invalidate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardMetrics {
    /// Number of products.
    pub total_products: usize,
    /// Products at or below their reorder threshold. Zero-stock products
    /// are included.
    pub low_stock: usize,
    /// Products with no stock on hand.
    pub out_of_stock: usize,
    /// Total value of stock on hand: sum of stock times unit price.
    pub total_stock_value: Decimal,
}

impl DashboardMetrics {
    /// Compute metrics over the current product collection.
    #[must_use]
    pub fn compute(products: &[Product]) -> Self {
        let total_stock_value = products
            .iter()
            .map(|p| Decimal::from(p.stock) * p.price.amount())
            .sum();
        Self {
            total_products: products.len(),
            low_stock: products.iter().filter(|p| p.stock <= p.min_stock).count(),
            out_of_stock: products.iter().filter(|p| p.stock == 0).count(),
            total_stock_value,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stockbook_core::Price;

    use super::*;
    use crate::models::ProductInput;

    fn product(stock: u32, min_stock: u32, price: i64) -> Product {
        Product::new(ProductInput {
            name: "Kopi".to_string(),
            category: "Minuman".to_string(),
            stock,
            unit: "pcs".to_string(),
            min_stock,
            price: Price::new(Decimal::from(price)).unwrap(),
        })
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let metrics = DashboardMetrics::compute(&[]);
        assert_eq!(metrics, DashboardMetrics::default());
    }

    #[test]
    fn test_stock_at_threshold_counts_as_low() {
        let metrics = DashboardMetrics::compute(&[product(5, 5, 1000)]);
        assert_eq!(metrics.total_products, 1);
        assert_eq!(metrics.low_stock, 1);
        assert_eq!(metrics.out_of_stock, 0);
        assert_eq!(metrics.total_stock_value, Decimal::from(5000));
    }

    #[test]
    fn test_zero_threshold_counts_only_exhausted_products() {
        let products = [product(0, 0, 100), product(1, 0, 100)];
        let metrics = DashboardMetrics::compute(&products);
        assert_eq!(metrics.low_stock, 1);
        assert_eq!(metrics.out_of_stock, 1);
    }

    #[test]
    fn test_out_of_stock_is_also_low() {
        let products = [product(0, 3, 100)];
        let metrics = DashboardMetrics::compute(&products);
        assert_eq!(metrics.low_stock, 1);
        assert_eq!(metrics.out_of_stock, 1);
    }

    #[test]
    fn test_stock_value_sums_across_products() {
        let products = [product(2, 0, 250), product(3, 0, 100)];
        let metrics = DashboardMetrics::compute(&products);
        assert_eq!(metrics.total_stock_value, Decimal::from(800));
    }

    #[test]
    fn test_fractional_prices_keep_precision() {
        let mut item = product(3, 0, 0);
        item.price = Price::new(Decimal::new(1999, 2)).unwrap();
        let metrics = DashboardMetrics::compute(&[item]);
        assert_eq!(metrics.total_stock_value, Decimal::new(5997, 2));
    }
}
