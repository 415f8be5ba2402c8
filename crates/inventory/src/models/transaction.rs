//! Stock transaction domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{Direction, ProductId, Quantity, TransactionId};

use super::Product;

/// A recorded stock movement.
///
/// Transactions are append-only history: once recorded they are never
/// edited or deleted, and they survive deletion of the product they
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockTransaction {
    /// Unique transaction ID.
    pub id: TransactionId,
    /// Product this movement applied to. May reference a since-deleted
    /// product.
    pub product_id: ProductId,
    /// Product name captured at transaction time; later renames do not
    /// rewrite history.
    pub product_name: String,
    /// Whether stock moved in or out.
    pub direction: Direction,
    /// Units moved.
    pub quantity: Quantity,
    /// Optional free-text note.
    pub note: Option<String>,
    /// When the movement was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Input for adjusting a product's stock.
#[derive(Debug, Clone, Deserialize)]
pub struct StockAdjustment {
    /// Product to adjust.
    pub product_id: ProductId,
    /// Units to move; always positive, direction decides the sign.
    pub quantity: Quantity,
    /// Whether stock moves in or out.
    pub direction: Direction,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Result of a successfully applied stock adjustment.
#[derive(Debug, Clone, Serialize)]
pub struct StockMovement {
    /// The product with its updated stock level.
    pub product: Product,
    /// The newly appended history entry.
    pub transaction: StockTransaction,
}

impl StockTransaction {
    /// Record a movement against `product_name` with a fresh ID and the
    /// current timestamp.
    pub(crate) fn record(
        product_id: ProductId,
        product_name: &str,
        direction: Direction,
        quantity: Quantity,
        note: Option<String>,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            product_id,
            product_name: product_name.to_string(),
            direction,
            quantity,
            note,
            recorded_at: Utc::now(),
        }
    }
}
