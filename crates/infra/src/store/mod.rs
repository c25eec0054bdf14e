//! Transactional store boundary.
//!
//! Defines the storage abstraction the services run against, plus an
//! in-memory implementation used by the API binary and the tests.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryWarehouseStore;
pub use r#trait::{StockCommit, StoreError, StoreSnapshot, WarehouseStore};
