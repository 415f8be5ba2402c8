//! Integration tests for Stockbook.
//!
//! End-to-end flows through the public API: file-backed persistence,
//! store mutations, stock adjustments, derived metrics, and filtering.
//! The tests live in `tests/`; this crate provides shared support.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;

use stockbook_core::Price;
use stockbook_inventory::ProductInput;

/// Initialise test logging once; safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A well-formed product input for tests.
#[must_use]
pub fn product_input(name: &str, category: &str, stock: u32, min_stock: u32, price: u32) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        category: category.to_string(),
        stock,
        unit: "pcs".to_string(),
        min_stock,
        price: Price::new(Decimal::from(price)).unwrap_or(Price::ZERO),
    }
}
