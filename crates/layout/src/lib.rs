//! Layout domain module.
//!
//! The single warehouse definition and the aisle × tier grid it spans.
//! Materializing the grid into stored locations happens in the
//! infrastructure layer; this crate only decides which coordinates exist.

pub mod grid;
pub mod warehouse;

pub use grid::{GridDimensions, MAX_GRID_LOCATIONS};
pub use warehouse::{ConfigureWarehouse, Warehouse};
