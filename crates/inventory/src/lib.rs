//! Inventory ledger domain module.
//!
//! Business rules for slot occupancy and stock movement, implemented as pure
//! deterministic logic (no IO, no storage). Every successful receive or pick
//! yields exactly one new location state and one transaction record; the
//! infrastructure layer commits the pair atomically.

pub mod location;
pub mod transaction;

pub use location::{
    Location, Occupancy, PickStock, ReceiveStock, StockCommand, StockEvent, StockOutcome,
    StockPicked, StockReceived,
};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
