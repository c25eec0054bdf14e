//! Layout service: the single warehouse and its location grid.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, instrument};

use rackline_core::{
    entity::index_by_id, Coordinate, DomainError, LocationId, ProductId, WarehouseId,
};
use rackline_inventory::Location;
use rackline_layout::{ConfigureWarehouse, Warehouse};

use crate::error::ServiceResult;
use crate::store::WarehouseStore;

/// Read-side projection of one location, with the occupant's name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationView {
    pub id: LocationId,
    pub aisle: u32,
    pub tier: u32,
    pub is_occupied: bool,
    pub product_id: Option<ProductId>,
    pub product_name: Option<String>,
    pub quantity: u64,
}

impl LocationView {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.aisle, self.tier)
    }
}

#[derive(Debug, Clone)]
pub struct LayoutService<S> {
    store: S,
}

impl<S> LayoutService<S>
where
    S: WarehouseStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Replace the warehouse and its whole grid (destructive reset).
    ///
    /// Every new location starts vacant. The previous grid and the transaction
    /// ledger that referenced it are dropped in the same store write.
    #[instrument(skip(self, cmd), fields(name = %cmd.name, aisles = cmd.aisle_count, tiers = cmd.tier_count), err)]
    pub fn configure(&self, cmd: ConfigureWarehouse) -> ServiceResult<WarehouseId> {
        let now = Utc::now();
        let warehouse = Warehouse::configure(WarehouseId::new(), cmd, now)?;
        let warehouse_id = warehouse.id_typed();

        let locations: Vec<Location> = warehouse
            .dimensions()
            .coordinates()
            .map(|c| Location::vacant(LocationId::new(), warehouse_id, c, now))
            .collect();
        let count = locations.len();

        self.store.replace_layout(warehouse, locations)?;

        info!(%warehouse_id, locations = count, "warehouse configured");
        Ok(warehouse_id)
    }

    pub fn current(&self) -> ServiceResult<Warehouse> {
        Ok(self.store.warehouse()?.ok_or(DomainError::NotConfigured)?)
    }

    /// All locations ordered by `(aisle, tier)`; empty when not configured.
    pub fn list_locations(&self) -> ServiceResult<Vec<LocationView>> {
        let snapshot = self.store.snapshot()?;
        let products = index_by_id(&snapshot.products);

        Ok(snapshot
            .locations
            .iter()
            .map(|l| {
                let coordinate = l.coordinate();
                let product_id = l.product_id();
                LocationView {
                    id: l.id_typed(),
                    aisle: coordinate.aisle,
                    tier: coordinate.tier,
                    is_occupied: l.is_occupied(),
                    product_id,
                    product_name: product_id
                        .and_then(|id| products.get(&id))
                        .map(|p| p.name().to_string()),
                    quantity: l.quantity(),
                }
            })
            .collect())
    }
}
