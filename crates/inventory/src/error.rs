//! Error types for inventory operations.

use thiserror::Error;

use stockbook_core::ProductId;

use crate::storage::StorageError;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// No product exists with the given ID.
    #[error("product {id} not found")]
    ProductNotFound {
        /// The ID that matched nothing.
        id: ProductId,
    },

    /// A stock-out would take the product's stock below zero.
    #[error("insufficient stock for product {id}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Product being adjusted.
        id: ProductId,
        /// Units the adjustment asked to remove.
        requested: u32,
        /// Units actually on hand.
        available: u32,
    },

    /// A stock-in would overflow the stock counter.
    #[error("stock for product {id} would overflow")]
    StockOverflow {
        /// Product being adjusted.
        id: ProductId,
    },

    /// A collection could not be serialized for persistence.
    #[error("failed to encode record {key}: {source}")]
    Encode {
        /// Record key being written.
        key: &'static str,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The storage backend failed. The mutation was not applied.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
