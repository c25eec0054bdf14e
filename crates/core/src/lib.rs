//! `rackline-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, layout
//! and inventory crates (no storage, no HTTP).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot, ExpectedVersion};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{LocationId, ProductId, TransactionId, WarehouseId};
pub use value_object::{Coordinate, Quantity, ValueObject};
