//! Infrastructure layer: storage, service orchestration and configuration.
//!
//! The services here are the API consumed by outer adapters:
//!
//! - [`LayoutService`]: warehouse setup and location listing
//! - [`CatalogService`]: product registration and lookup
//! - [`Ledger`]: receive/pick, the only writer of stock and transactions
//! - [`Reporting`]: occupancy and transaction history
//!
//! All of them are generic over a [`WarehouseStore`] and are meant to share
//! one store through `Arc`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod ledger;
pub mod reporting;
pub mod store;

mod integration_tests;

pub use catalog::CatalogService;
pub use config::{ConfigError, LedgerConfig};
pub use error::{ServiceError, ServiceResult};
pub use layout::{LayoutService, LocationView};
pub use ledger::{Ledger, PickReceipt, PickRequest, ReceiveReceipt, ReceiveRequest};
pub use reporting::{OccupancyReport, Reporting, TransactionView};
pub use store::{InMemoryWarehouseStore, StockCommit, StoreError, StoreSnapshot, WarehouseStore};
