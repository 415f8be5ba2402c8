//! The authoritative in-memory product and transaction collections.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use stockbook_core::ProductId;

use crate::error::InventoryError;
use crate::models::{Product, ProductInput, StockTransaction};
use crate::storage::StorageBackend;

/// Record key for the product collection.
pub const PRODUCTS_KEY: &str = "inventory_products";

/// Record key for the transaction collection.
pub const TRANSACTIONS_KEY: &str = "inventory_transactions";

/// Schema version written into every persisted record envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Persisted wire shape: `{ "schema_version": 1, "items": [...] }`.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct RecordEnvelope<T> {
    schema_version: u32,
    #[serde(default)]
    items: Vec<T>,
}

fn encode_record<T: Serialize>(items: &[T]) -> Result<Vec<u8>, serde_json::Error> {
    #[derive(Serialize)]
    struct Envelope<'a, T> {
        schema_version: u32,
        items: &'a [T],
    }
    serde_json::to_vec(&Envelope {
        schema_version: SCHEMA_VERSION,
        items,
    })
}

/// A recoverable problem found while loading persisted records.
///
/// Both variants mean the affected collection started empty instead of
/// crashing the load; the view layer can tell the user and offer a reset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadWarning {
    /// The record could not be deserialized.
    #[error("record {key} is corrupt; starting from an empty collection")]
    Corrupt {
        /// Record key that failed to parse.
        key: String,
    },

    /// The record was written by an unknown schema version.
    #[error("record {key} has unsupported schema version {found}")]
    UnsupportedVersion {
        /// Record key with the version mismatch.
        key: String,
        /// Version found in the envelope.
        found: u32,
    },
}

/// Inventory store owning the authoritative collections.
///
/// Holds the product and transaction collections in insertion order,
/// mirroring persisted state, and persists the full collection on every
/// mutation (whole-collection overwrite, not incremental patch). Storage
/// is injected and the store is passed around explicitly; there are no
/// ambient singletons.
///
/// Mutations stage the new collection, persist it, and only then commit
/// it in memory, so a failed write leaves the store unchanged and the
/// failure reaches the caller as a typed error.
#[derive(Debug)]
pub struct InventoryStore<S> {
    pub(crate) storage: S,
    pub(crate) products: Vec<Product>,
    pub(crate) transactions: Vec<StockTransaction>,
    load_warnings: Vec<LoadWarning>,
}

impl<S: StorageBackend> InventoryStore<S> {
    /// Open the store, loading both records from `storage`.
    ///
    /// Absent records start as empty collections. Corrupt or
    /// version-mismatched records also start empty, with a
    /// [`LoadWarning`] retained on the store.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Storage`] if a record cannot be read
    /// from the backend.
    pub fn open(storage: S) -> Result<Self, InventoryError> {
        let mut load_warnings = Vec::new();
        let products = load_record(&storage, PRODUCTS_KEY, &mut load_warnings)?;
        let transactions = load_record(&storage, TRANSACTIONS_KEY, &mut load_warnings)?;
        info!(
            products = products.len(),
            transactions = transactions.len(),
            warnings = load_warnings.len(),
            "opened inventory store"
        );
        Ok(Self {
            storage,
            products,
            transactions,
            load_warnings,
        })
    }

    /// Products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Transaction history in append (chronological) order.
    #[must_use]
    pub fn transactions(&self) -> &[StockTransaction] {
        &self.transactions
    }

    /// Warnings collected while loading persisted records.
    #[must_use]
    pub fn load_warnings(&self) -> &[LoadWarning] {
        &self.load_warnings
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Consume the store and return the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Create a product from `input`.
    ///
    /// Assigns a fresh ID and the current timestamp, appends the product,
    /// and persists the collection. Duplicate names are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Storage`] or [`InventoryError::Encode`]
    /// if persisting fails; the in-memory collection is unchanged.
    pub fn create_product(&mut self, input: ProductInput) -> Result<Product, InventoryError> {
        let product = Product::new(input);
        let mut staged = self.products.clone();
        staged.push(product.clone());

        self.persist_products(&staged)?;
        self.products = staged;

        info!(product_id = %product.id, name = %product.name, "created product");
        Ok(product)
    }

    /// Replace every mutable field of the product with `id`.
    ///
    /// The ID and creation timestamp are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] if no product has
    /// `id`, or a persistence error (state unchanged).
    pub fn update_product(
        &mut self,
        id: ProductId,
        input: ProductInput,
    ) -> Result<Product, InventoryError> {
        let mut staged = self.products.clone();
        let Some(product) = staged.iter_mut().find(|p| p.id == id) else {
            return Err(InventoryError::ProductNotFound { id });
        };
        product.apply(input);
        let updated = product.clone();

        self.persist_products(&staged)?;
        self.products = staged;

        info!(product_id = %id, "updated product");
        Ok(updated)
    }

    /// Remove the product with `id`, returning it.
    ///
    /// Transaction history is untouched: entries referencing the deleted
    /// product remain valid history.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] if no product has
    /// `id`, or a persistence error (state unchanged).
    pub fn delete_product(&mut self, id: ProductId) -> Result<Product, InventoryError> {
        let Some(position) = self.products.iter().position(|p| p.id == id) else {
            return Err(InventoryError::ProductNotFound { id });
        };
        let mut staged = self.products.clone();
        let removed = staged.remove(position);

        self.persist_products(&staged)?;
        self.products = staged;

        info!(product_id = %id, name = %removed.name, "deleted product");
        Ok(removed)
    }

    pub(crate) fn persist_products(&mut self, products: &[Product]) -> Result<(), InventoryError> {
        let bytes = encode_record(products).map_err(|source| InventoryError::Encode {
            key: PRODUCTS_KEY,
            source,
        })?;
        self.storage.set(PRODUCTS_KEY, &bytes)?;
        Ok(())
    }

    pub(crate) fn persist_transactions(
        &mut self,
        transactions: &[StockTransaction],
    ) -> Result<(), InventoryError> {
        let bytes = encode_record(transactions).map_err(|source| InventoryError::Encode {
            key: TRANSACTIONS_KEY,
            source,
        })?;
        self.storage.set(TRANSACTIONS_KEY, &bytes)?;
        Ok(())
    }
}

fn load_record<S: StorageBackend, T: DeserializeOwned>(
    storage: &S,
    key: &str,
    warnings: &mut Vec<LoadWarning>,
) -> Result<Vec<T>, InventoryError> {
    let Some(bytes) = storage.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_slice::<RecordEnvelope<T>>(&bytes) {
        Ok(envelope) if envelope.schema_version == SCHEMA_VERSION => Ok(envelope.items),
        Ok(envelope) => {
            warn!(
                key,
                found = envelope.schema_version,
                "unsupported record schema version; starting empty"
            );
            warnings.push(LoadWarning::UnsupportedVersion {
                key: key.to_string(),
                found: envelope.schema_version,
            });
            Ok(Vec::new())
        }
        Err(error) => {
            warn!(key, %error, "corrupt record; starting empty");
            warnings.push(LoadWarning::Corrupt {
                key: key.to_string(),
            });
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::Ordering;

    use rust_decimal::Decimal;

    use stockbook_core::Price;

    use super::*;
    use crate::storage::MemoryStore;

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            category: "Minuman".to_string(),
            stock: 10,
            unit: "pcs".to_string(),
            min_stock: 2,
            price: Price::new(Decimal::from(1000)).unwrap(),
        }
    }

    fn open_empty() -> InventoryStore<MemoryStore> {
        InventoryStore::open(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_open_empty_backend() {
        let store = open_empty();
        assert!(store.products().is_empty());
        assert!(store.transactions().is_empty());
        assert!(store.load_warnings().is_empty());
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = open_empty();
        for i in 0..5 {
            store.create_product(input(&format!("Produk {i}"))).unwrap();
        }
        assert_eq!(store.products().len(), 5);

        let mut ids: Vec<_> = store.products().iter().map(|p| p.id).collect();
        ids.sort_by_key(ProductId::as_uuid);
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_create_allows_duplicate_names() {
        let mut store = open_empty();
        store.create_product(input("Kopi")).unwrap();
        store.create_product(input("Kopi")).unwrap();
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn test_update_replaces_all_mutable_fields() {
        let mut store = open_empty();
        let created = store.create_product(input("Kopi")).unwrap();

        let mut replacement = input("Kopi Hitam");
        replacement.category = "Sembako".to_string();
        replacement.stock = 3;
        let updated = store.update_product(created.id, replacement).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Kopi Hitam");
        assert_eq!(updated.category, "Sembako");
        assert_eq!(updated.stock, 3);
        assert_eq!(store.products().len(), 1);
    }

    #[test]
    fn test_update_missing_product() {
        let mut store = open_empty();
        let missing = ProductId::generate();
        let result = store.update_product(missing, input("Kopi"));
        assert!(matches!(
            result,
            Err(InventoryError::ProductNotFound { id }) if id == missing
        ));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = open_empty();
        let first = store.create_product(input("Kopi")).unwrap();
        let second = store.create_product(input("Gula")).unwrap();

        let removed = store.delete_product(first.id).unwrap();
        assert_eq!(removed.id, first.id);
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].id, second.id);
    }

    #[test]
    fn test_delete_missing_product() {
        let mut store = open_empty();
        assert!(matches!(
            store.delete_product(ProductId::generate()),
            Err(InventoryError::ProductNotFound { .. })
        ));
    }

    #[test]
    fn test_mutations_persist_round_trip() {
        let mut store = open_empty();
        store.create_product(input("Kopi")).unwrap();
        store.create_product(input("Gula")).unwrap();

        let reopened = InventoryStore::open(store.into_storage()).unwrap();
        assert_eq!(reopened.products().len(), 2);
        assert_eq!(reopened.products()[0].name, "Kopi");
        assert_eq!(reopened.products()[1].name, "Gula");
    }

    #[test]
    fn test_persisted_record_is_versioned() {
        let mut store = open_empty();
        store.create_product(input("Kopi")).unwrap();

        let backend = store.into_storage();
        let bytes = backend.raw(PRODUCTS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(value["schema_version"], SCHEMA_VERSION);
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_record_starts_empty_with_warning() {
        let mut backend = MemoryStore::new();
        backend.insert_raw(PRODUCTS_KEY, b"{not json".to_vec());

        let store = InventoryStore::open(backend).unwrap();
        assert!(store.products().is_empty());
        assert_eq!(
            store.load_warnings(),
            &[LoadWarning::Corrupt {
                key: PRODUCTS_KEY.to_string()
            }]
        );
    }

    #[test]
    fn test_unsupported_version_starts_empty_with_warning() {
        let mut backend = MemoryStore::new();
        backend.insert_raw(
            PRODUCTS_KEY,
            br#"{"schema_version":99,"items":[]}"#.to_vec(),
        );

        let store = InventoryStore::open(backend).unwrap();
        assert!(store.products().is_empty());
        assert_eq!(
            store.load_warnings(),
            &[LoadWarning::UnsupportedVersion {
                key: PRODUCTS_KEY.to_string(),
                found: 99
            }]
        );
    }

    #[test]
    fn test_write_failure_leaves_state_unchanged() {
        let backend = MemoryStore::new();
        let switch = backend.write_failure_switch();
        let mut store = InventoryStore::open(backend).unwrap();
        store.create_product(input("Kopi")).unwrap();

        switch.store(true, Ordering::Relaxed);
        let result = store.create_product(input("Gula"));
        assert!(matches!(result, Err(InventoryError::Storage(_))));
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].name, "Kopi");
    }
}
