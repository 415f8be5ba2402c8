//! Product filtering and history ordering for the view layer.

use crate::models::{Product, StockTransaction};

/// Category constraint for a product query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match any category.
    #[default]
    All,
    /// Match products whose category equals the value exactly.
    Only(String),
}

/// Filter criteria for listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name or category.
    pub search: Option<String>,
    /// Category constraint; exact match unless [`CategoryFilter::All`].
    pub category: CategoryFilter,
}

impl ProductQuery {
    /// Whether `product` satisfies both the search term and the category
    /// constraint.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            product.name.to_lowercase().contains(&term)
                || product.category.to_lowercase().contains(&term)
        });
        let matches_category = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        };
        matches_search && matches_category
    }
}

/// Products matching `query`, in collection order.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    products.iter().filter(|p| query.matches(p)).collect()
}

/// Distinct category values in order of first appearance.
#[must_use]
pub fn category_options(products: &[Product]) -> Vec<&str> {
    let mut options = Vec::new();
    for product in products {
        if !options.contains(&product.category.as_str()) {
            options.push(product.category.as_str());
        }
    }
    options
}

/// Transaction history ordered newest first.
///
/// The stored collection stays in append order; history views sort a
/// borrowed copy. The sort is stable, so same-timestamp entries keep
/// their relative append order.
#[must_use]
pub fn history_newest_first(transactions: &[StockTransaction]) -> Vec<&StockTransaction> {
    let mut ordered: Vec<&StockTransaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    ordered
}
