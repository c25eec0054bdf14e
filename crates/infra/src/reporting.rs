//! Read-only reports derived from one consistent store snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use rackline_core::{
    entity::index_by_id, DomainError, LocationId, ProductId, TransactionId,
};
use rackline_inventory::TransactionKind;

use crate::error::ServiceResult;
use crate::store::WarehouseStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyReport {
    pub total_locations: u64,
    pub occupied_locations: u64,
    pub available_locations: u64,
    /// Percentage of occupied locations, rounded to 2 decimals.
    pub occupancy_percentage: f64,
}

/// One ledger entry joined with its product name and location label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub id: TransactionId,
    pub sequence: u64,
    pub kind: TransactionKind,
    pub product_id: ProductId,
    pub product_name: String,
    pub location_id: LocationId,
    /// e.g. `"Aisle 1, Tier 2"`.
    pub location: String,
    pub quantity: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Reporting<S> {
    store: S,
}

impl<S> Reporting<S>
where
    S: WarehouseStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn occupancy_report(&self) -> ServiceResult<OccupancyReport> {
        let snapshot = self.store.snapshot()?;
        if snapshot.warehouse.is_none() {
            return Err(DomainError::NotConfigured.into());
        }

        let total = snapshot.locations.len() as u64;
        let occupied = snapshot.locations.iter().filter(|l| l.is_occupied()).count() as u64;

        Ok(OccupancyReport {
            total_locations: total,
            occupied_locations: occupied,
            available_locations: total - occupied,
            occupancy_percentage: percentage(occupied, total),
        })
    }

    /// Every transaction, newest first.
    pub fn transaction_history(&self) -> ServiceResult<Vec<TransactionView>> {
        let snapshot = self.store.snapshot()?;
        let products = index_by_id(&snapshot.products);
        let locations: std::collections::HashMap<_, _> = snapshot
            .locations
            .iter()
            .map(|l| (l.id_typed(), l.coordinate()))
            .collect();

        Ok(snapshot
            .transactions
            .iter()
            .rev()
            .map(|t| TransactionView {
                id: t.id,
                sequence: t.sequence,
                kind: t.kind,
                product_id: t.product_id,
                product_name: products
                    .get(&t.product_id)
                    .map(|p| p.name().to_string())
                    .unwrap_or_default(),
                location_id: t.location_id,
                location: locations
                    .get(&t.location_id)
                    .map(|c| c.label())
                    .unwrap_or_default(),
                quantity: t.quantity.get(),
                timestamp: t.timestamp,
            })
            .collect())
    }
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
