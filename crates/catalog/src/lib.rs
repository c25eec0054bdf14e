//! Catalog domain module.
//!
//! Product identity and registration rules. Products are immutable once
//! registered; SKU uniqueness across the catalog is enforced by the store.

pub mod product;

pub use product::{Product, RegisterProduct};
