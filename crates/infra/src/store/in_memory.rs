use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rackline_catalog::Product;
use rackline_core::{AggregateRoot, Coordinate, ExpectedVersion, LocationId, ProductId};
use rackline_inventory::{Location, Transaction};
use rackline_layout::Warehouse;

use super::r#trait::{StockCommit, StoreError, StoreSnapshot, WarehouseStore};

#[derive(Debug, Default)]
struct State {
    warehouse: Option<Warehouse>,
    locations: BTreeMap<Coordinate, Location>,
    location_index: HashMap<LocationId, Coordinate>,
    products: BTreeMap<ProductId, Product>,
    skus: HashMap<String, ProductId>,
    transactions: Vec<Transaction>,
    last_sequence: u64,
}

/// In-memory transactional store.
///
/// One `RwLock` guards every relation: reads share the lock, each write holds
/// it exclusively for its whole check-and-mutate step.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    state: RwLock<State>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn validate_layout(warehouse: &Warehouse, locations: &[Location]) -> Result<(), StoreError> {
        let expected = warehouse.dimensions().location_count();
        if locations.len() as u64 != expected {
            return Err(StoreError::InvalidCommit(format!(
                "layout has {} locations, warehouse spans {expected}",
                locations.len()
            )));
        }

        let mut seen = HashSet::with_capacity(locations.len());
        for location in locations {
            let coordinate = location.coordinate();
            if location.warehouse_id() != warehouse.id_typed() {
                return Err(StoreError::InvalidCommit(format!(
                    "location at {coordinate} belongs to another warehouse"
                )));
            }
            if !warehouse.contains(coordinate) {
                return Err(StoreError::InvalidCommit(format!(
                    "location at {coordinate} is outside the grid"
                )));
            }
            if location.is_occupied() {
                return Err(StoreError::InvalidCommit(format!(
                    "new location at {coordinate} must start vacant"
                )));
            }
            if !seen.insert(coordinate) {
                return Err(StoreError::InvalidCommit(format!(
                    "duplicate location at {coordinate}"
                )));
            }
        }
        Ok(())
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    fn replace_layout(&self, warehouse: Warehouse, locations: Vec<Location>) -> Result<(), StoreError> {
        Self::validate_layout(&warehouse, &locations)?;

        let mut state = self.write()?;
        state.location_index = locations
            .iter()
            .map(|l| (l.id_typed(), l.coordinate()))
            .collect();
        state.locations = locations.into_iter().map(|l| (l.coordinate(), l)).collect();
        state.warehouse = Some(warehouse);
        // Transactions reference locations; the reset cascades to the ledger.
        state.transactions.clear();

        Ok(())
    }

    fn warehouse(&self) -> Result<Option<Warehouse>, StoreError> {
        Ok(self.read()?.warehouse.clone())
    }

    fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut state = self.write()?;

        if state.skus.contains_key(product.sku()) {
            return Err(StoreError::DuplicateSku(product.sku().to_string()));
        }
        if state.products.contains_key(&product.id_typed()) {
            return Err(StoreError::InvalidCommit(format!(
                "product {} already exists",
                product.id_typed()
            )));
        }

        state.skus.insert(product.sku().to_string(), product.id_typed());
        state.products.insert(product.id_typed(), product);
        Ok(())
    }

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.read()?.products.get(&id).cloned())
    }

    fn products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    fn first_vacant_location(&self) -> Result<Option<Location>, StoreError> {
        let state = self.read()?;
        Ok(state.locations.values().find(|l| !l.is_occupied()).cloned())
    }

    fn location_at(&self, coordinate: Coordinate) -> Result<Option<Location>, StoreError> {
        Ok(self.read()?.locations.get(&coordinate).cloned())
    }

    fn commit(
        &self,
        commit: StockCommit,
        expected_version: ExpectedVersion,
    ) -> Result<Transaction, StoreError> {
        let StockCommit {
            location,
            transaction,
        } = commit;

        let location_id = location.id_typed();
        if transaction.location_id != location_id {
            return Err(StoreError::InvalidCommit(
                "transaction does not reference the committed location".to_string(),
            ));
        }

        let mut state = self.write()?;

        if !state.products.contains_key(&transaction.product_id) {
            return Err(StoreError::InvalidCommit(format!(
                "transaction references unknown product {}",
                transaction.product_id
            )));
        }

        let coordinate = state.location_index.get(&location_id).copied().ok_or_else(|| {
            StoreError::Concurrency(format!(
                "location {location_id} no longer exists (layout was reconfigured)"
            ))
        })?;

        let current = state.locations.get(&coordinate).map(|l| l.version()).ok_or_else(|| {
            StoreError::InvalidCommit(format!("location index out of sync at {coordinate}"))
        })?;

        if !expected_version.matches(current) {
            return Err(StoreError::Concurrency(format!(
                "location at {coordinate}: expected {expected_version:?}, found {current}"
            )));
        }
        if location.coordinate() != coordinate {
            return Err(StoreError::InvalidCommit(format!(
                "location {location_id} cannot move from {coordinate} to {}",
                location.coordinate()
            )));
        }

        state.last_sequence += 1;
        let committed = transaction.into_committed(state.last_sequence);

        state.locations.insert(coordinate, location);
        state.transactions.push(committed.clone());

        Ok(committed)
    }

    fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let state = self.read()?;
        Ok(StoreSnapshot {
            warehouse: state.warehouse.clone(),
            locations: state.locations.values().cloned().collect(),
            products: state.products.values().cloned().collect(),
            transactions: state.transactions.clone(),
        })
    }
}
