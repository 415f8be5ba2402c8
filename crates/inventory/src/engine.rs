//! Stock adjustment: the one write path that touches both collections.

use tracing::info;

use stockbook_core::Direction;

use crate::error::InventoryError;
use crate::models::{StockAdjustment, StockMovement, StockTransaction};
use crate::storage::StorageBackend;
use crate::store::InventoryStore;

impl<S: StorageBackend> InventoryStore<S> {
    /// Apply a stock adjustment.
    ///
    /// Recomputes the product's stock and appends exactly one transaction
    /// carrying a snapshot of the product name; both collections are
    /// persisted together. When the product is missing or the adjustment
    /// is invalid, nothing is recorded and nothing is mutated.
    ///
    /// Stock never goes negative: a stock-out larger than the available
    /// stock is rejected here at the mutation layer instead of being left
    /// to caller-side form validation.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::ProductNotFound`] if `product_id` matches no
    ///   product.
    /// - [`InventoryError::InsufficientStock`] if an `out` adjustment
    ///   exceeds the available stock.
    /// - [`InventoryError::StockOverflow`] if an `in` adjustment would
    ///   overflow the stock counter.
    /// - [`InventoryError::Storage`] / [`InventoryError::Encode`] if
    ///   persisting either collection fails; in-memory state is left
    ///   unchanged.
    pub fn adjust_stock(
        &mut self,
        adjustment: StockAdjustment,
    ) -> Result<StockMovement, InventoryError> {
        let StockAdjustment {
            product_id,
            quantity,
            direction,
            note,
        } = adjustment;

        let mut staged_products = self.products.clone();
        let Some(product) = staged_products.iter_mut().find(|p| p.id == product_id) else {
            return Err(InventoryError::ProductNotFound { id: product_id });
        };

        let new_stock = match direction {
            Direction::In => product
                .stock
                .checked_add(quantity.get())
                .ok_or(InventoryError::StockOverflow { id: product_id })?,
            Direction::Out => {
                product
                    .stock
                    .checked_sub(quantity.get())
                    .ok_or(InventoryError::InsufficientStock {
                        id: product_id,
                        requested: quantity.get(),
                        available: product.stock,
                    })?
            }
        };

        let transaction =
            StockTransaction::record(product_id, &product.name, direction, quantity, note);
        product.stock = new_stock;
        let updated = product.clone();

        let mut staged_transactions = self.transactions.clone();
        staged_transactions.push(transaction.clone());

        // Authoritative stock first, history append second.
        self.persist_products(&staged_products)?;
        self.persist_transactions(&staged_transactions)?;
        self.products = staged_products;
        self.transactions = staged_transactions;

        info!(
            product_id = %product_id,
            direction = %direction,
            quantity = %quantity,
            stock = updated.stock,
            "adjusted stock"
        );
        Ok(StockMovement {
            product: updated,
            transaction,
        })
    }
}
