use std::sync::Arc;

use thiserror::Error;

use rackline_catalog::Product;
use rackline_core::{Coordinate, ExpectedVersion, ProductId};
use rackline_inventory::{Location, NewTransaction, Transaction};
use rackline_layout::Warehouse;

/// A decided stock movement: the location's next state plus its audit record.
///
/// Stores persist both or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockCommit {
    pub location: Location,
    pub transaction: NewTransaction,
}

/// Consistent point-in-time copy of the whole store, for read-side joins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub warehouse: Option<Warehouse>,
    /// Ordered by `(aisle, tier)`.
    pub locations: Vec<Location>,
    /// Ordered by registration.
    pub products: Vec<Product>,
    /// Ordered by ascending sequence.
    pub transactions: Vec<Transaction>,
}

/// Store operation error.
///
/// These are storage-level failures as opposed to domain errors:
///
/// - **Concurrency**: a commit was decided against a stale location
/// - **DuplicateSku**: unique constraint on product SKU
/// - **InvalidCommit**: the write itself is malformed (caller bug)
/// - **Unavailable**: the backing state cannot be accessed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("optimistic concurrency check failed: {0}")]
    Concurrency(String),

    #[error("duplicate sku: {0}")]
    DuplicateSku(String),

    #[error("invalid commit: {0}")]
    InvalidCommit(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Transactional storage for warehouse, catalog, locations and the ledger.
///
/// ## Write semantics
///
/// - `replace_layout` swaps the warehouse and its full location grid in one
///   exclusive step and clears the transaction ledger (transactions reference
///   locations that no longer exist). Products are kept.
/// - `insert_product` enforces SKU uniqueness (exact, case-sensitive).
/// - `commit` writes a location's next state and appends its transaction
///   atomically, only if the stored location still has `expected_version`.
///   A missing location (layout replaced since the read) is also a
///   concurrency failure.
///
/// ## Read semantics
///
/// Every read observes a committed state; `snapshot` observes all relations
/// at the same instant.
pub trait WarehouseStore: Send + Sync {
    fn replace_layout(&self, warehouse: Warehouse, locations: Vec<Location>) -> Result<(), StoreError>;

    fn warehouse(&self) -> Result<Option<Warehouse>, StoreError>;

    fn insert_product(&self, product: Product) -> Result<(), StoreError>;

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    fn products(&self) -> Result<Vec<Product>, StoreError>;

    /// The vacant location with the lowest `(aisle, tier)`, if any.
    fn first_vacant_location(&self) -> Result<Option<Location>, StoreError>;

    fn location_at(&self, coordinate: Coordinate) -> Result<Option<Location>, StoreError>;

    /// Persist a stock movement; returns the transaction with its sequence.
    fn commit(
        &self,
        commit: StockCommit,
        expected_version: ExpectedVersion,
    ) -> Result<Transaction, StoreError>;

    fn snapshot(&self) -> Result<StoreSnapshot, StoreError>;
}

impl<S> WarehouseStore for Arc<S>
where
    S: WarehouseStore + ?Sized,
{
    fn replace_layout(&self, warehouse: Warehouse, locations: Vec<Location>) -> Result<(), StoreError> {
        (**self).replace_layout(warehouse, locations)
    }

    fn warehouse(&self) -> Result<Option<Warehouse>, StoreError> {
        (**self).warehouse()
    }

    fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        (**self).insert_product(product)
    }

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).product(id)
    }

    fn products(&self) -> Result<Vec<Product>, StoreError> {
        (**self).products()
    }

    fn first_vacant_location(&self) -> Result<Option<Location>, StoreError> {
        (**self).first_vacant_location()
    }

    fn location_at(&self, coordinate: Coordinate) -> Result<Option<Location>, StoreError> {
        (**self).location_at(coordinate)
    }

    fn commit(
        &self,
        commit: StockCommit,
        expected_version: ExpectedVersion,
    ) -> Result<Transaction, StoreError> {
        (**self).commit(commit, expected_version)
    }

    fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        (**self).snapshot()
    }
}
