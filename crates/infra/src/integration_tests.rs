//! Integration tests for the full service pipeline.
//!
//! Tests: Layout/Catalog setup → Ledger receive/pick → Store → Reporting
//!
//! Verifies:
//! - Location occupancy invariants and transaction pairing
//! - Failures leave no partial state
//! - Concurrent receives claim distinct locations
//! - Stale commits are retried, then surfaced as conflicts

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Barrier, Mutex};

    use chrono::Utc;
    use proptest::prelude::*;

    use rackline_catalog::{Product, RegisterProduct};
    use rackline_core::{
        Coordinate, DomainError, ExpectedVersion, LocationId, ProductId, WarehouseId,
    };
    use rackline_inventory::{Location, Transaction, TransactionKind};
    use rackline_layout::{ConfigureWarehouse, Warehouse};

    use crate::catalog::CatalogService;
    use crate::config::LedgerConfig;
    use crate::error::ServiceError;
    use crate::layout::{LayoutService, LocationView};
    use crate::ledger::{Ledger, PickRequest, ReceiveRequest};
    use crate::reporting::Reporting;
    use crate::store::{
        InMemoryWarehouseStore, StockCommit, StoreError, StoreSnapshot, WarehouseStore,
    };

    struct Services<S> {
        layout: LayoutService<S>,
        catalog: CatalogService<S>,
        ledger: Ledger<S>,
        reporting: Reporting<S>,
    }

    fn services_on<S: WarehouseStore + Clone>(store: S, config: LedgerConfig) -> Services<S> {
        Services {
            layout: LayoutService::new(store.clone()),
            catalog: CatalogService::new(store.clone()),
            ledger: Ledger::new(store.clone(), config),
            reporting: Reporting::new(store),
        }
    }

    fn setup(aisles: i64, tiers: i64) -> Services<Arc<InMemoryWarehouseStore>> {
        let s = services_on(Arc::new(InMemoryWarehouseStore::new()), LedgerConfig::default());
        s.layout
            .configure(ConfigureWarehouse::new("Main", aisles, tiers))
            .unwrap();
        s
    }

    fn register<S: WarehouseStore>(s: &Services<S>, sku: &str) -> ProductId {
        s.catalog
            .register(RegisterProduct::new(format!("Product {sku}"), sku, ""))
            .unwrap()
    }

    fn receive<S: WarehouseStore>(
        s: &Services<S>,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Coordinate, ServiceError> {
        s.ledger
            .receive(ReceiveRequest {
                product_id,
                quantity,
            })
            .map(|r| r.coordinate)
    }

    fn pick<S: WarehouseStore>(
        s: &Services<S>,
        aisle: i64,
        tier: i64,
        quantity: i64,
    ) -> Result<u64, ServiceError> {
        s.ledger
            .pick(PickRequest {
                aisle,
                tier,
                quantity,
            })
            .map(|r| r.remaining)
    }

    fn location_at<S: WarehouseStore>(s: &Services<S>, aisle: u32, tier: u32) -> LocationView {
        s.layout
            .list_locations()
            .unwrap()
            .into_iter()
            .find(|l| l.coordinate() == Coordinate::new(aisle, tier))
            .unwrap()
    }

    fn domain_err<T: core::fmt::Debug>(result: Result<T, ServiceError>) -> DomainError {
        match result {
            Err(ServiceError::Domain(e)) => e,
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn configure_materializes_complete_free_grid() {
        let s = setup(3, 4);

        let locations = s.layout.list_locations().unwrap();
        assert_eq!(locations.len(), 12);

        let coords: HashSet<_> = locations.iter().map(|l| l.coordinate()).collect();
        assert_eq!(coords.len(), 12);
        for aisle in 1..=3 {
            for tier in 1..=4 {
                assert!(coords.contains(&Coordinate::new(aisle, tier)));
            }
        }
        assert!(locations
            .iter()
            .all(|l| !l.is_occupied && l.product_id.is_none() && l.quantity == 0));

        let warehouse = s.layout.current().unwrap();
        assert_eq!(warehouse.name(), "Main");
        assert_eq!((warehouse.aisle_count(), warehouse.tier_count()), (3, 4));
    }

    #[test]
    fn configure_rejects_invalid_dimensions_and_keeps_existing_grid() {
        let s = setup(2, 2);
        let before = s.layout.list_locations().unwrap();

        for (a, t) in [(0, 2), (2, 0), (-3, 1)] {
            let err = domain_err(s.layout.configure(ConfigureWarehouse::new("Bad", a, t)));
            assert!(matches!(err, DomainError::InvalidDimension(_)));
        }

        assert_eq!(s.layout.list_locations().unwrap(), before);
    }

    #[test]
    fn unconfigured_store_reports_not_configured() {
        let s = services_on(Arc::new(InMemoryWarehouseStore::new()), LedgerConfig::default());

        assert_eq!(domain_err(s.layout.current()), DomainError::NotConfigured);
        assert_eq!(domain_err(s.reporting.occupancy_report()), DomainError::NotConfigured);
        assert!(s.layout.list_locations().unwrap().is_empty());

        let p = register(&s, "SKU-1");
        assert_eq!(domain_err(receive(&s, p, 1)), DomainError::NoAvailableLocation);
        assert_eq!(
            domain_err(pick(&s, 1, 1, 1)),
            DomainError::LocationNotFound { aisle: 1, tier: 1 }
        );
    }

    #[test]
    fn reconfigure_replaces_every_location() {
        let s = setup(2, 2);
        let old_ids: HashSet<_> = s.layout.list_locations().unwrap().iter().map(|l| l.id).collect();

        s.layout.configure(ConfigureWarehouse::new("Annex", 2, 2)).unwrap();

        let new = s.layout.list_locations().unwrap();
        assert_eq!(new.len(), 4);
        assert!(new.iter().all(|l| !old_ids.contains(&l.id)));
        assert_eq!(s.layout.current().unwrap().name(), "Annex");
    }

    #[test]
    fn reconfigure_clears_ledger_but_keeps_catalog() {
        let s = setup(2, 2);
        let p = register(&s, "SKU-1");
        receive(&s, p, 5).unwrap();

        s.layout.configure(ConfigureWarehouse::new("Fresh", 1, 3)).unwrap();

        assert!(s.reporting.transaction_history().unwrap().is_empty());
        assert_eq!(s.catalog.lookup(p).unwrap().sku(), "SKU-1");
        assert!(s.layout.list_locations().unwrap().iter().all(|l| !l.is_occupied));
    }

    #[test]
    fn duplicate_sku_is_rejected_and_first_product_unaffected() {
        let s = setup(1, 1);
        let first = s
            .catalog
            .register(RegisterProduct::new("X", "SKU1", ""))
            .unwrap();

        let err = domain_err(s.catalog.register(RegisterProduct::new("Y", "SKU1", "")));
        assert_eq!(err, DomainError::DuplicateSku("SKU1".to_string()));

        let products = s.catalog.list().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id_typed(), first);
        assert_eq!(products[0].name(), "X");
    }

    #[test]
    fn lookup_unknown_product_is_not_found() {
        let s = setup(1, 1);
        let missing = ProductId::new();
        assert_eq!(
            domain_err(s.catalog.lookup(missing)),
            DomainError::ProductNotFound(missing)
        );
    }

    #[test]
    fn receive_occupies_lowest_free_location_and_records_transaction() {
        let s = setup(2, 2);
        let p = register(&s, "SKU-P");

        assert_eq!(receive(&s, p, 5).unwrap(), Coordinate::new(1, 1));

        let slot = location_at(&s, 1, 1);
        assert!(slot.is_occupied);
        assert_eq!(slot.product_id, Some(p));
        assert_eq!(slot.product_name.as_deref(), Some("Product SKU-P"));
        assert_eq!(slot.quantity, 5);

        let history = s.reporting.transaction_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, TransactionKind::Receive);
        assert_eq!(history[0].product_id, p);
        assert_eq!(history[0].location_id, slot.id);
        assert_eq!(history[0].location, "Aisle 1, Tier 1");
        assert_eq!(history[0].quantity, 5);

        // Next receive goes to the next tier in the same aisle.
        assert_eq!(receive(&s, p, 1).unwrap(), Coordinate::new(1, 2));
    }

    #[test]
    fn pick_exact_depletion_frees_location_and_records_prior_product() {
        let s = setup(2, 2);
        let p = register(&s, "SKU-P");
        receive(&s, p, 5).unwrap();

        assert_eq!(pick(&s, 1, 1, 5).unwrap(), 0);

        let slot = location_at(&s, 1, 1);
        assert!(!slot.is_occupied);
        assert_eq!(slot.product_id, None);
        assert_eq!(slot.product_name, None);
        assert_eq!(slot.quantity, 0);

        let history = s.reporting.transaction_history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, TransactionKind::Pick);
        assert_eq!(history[0].product_id, p);
        assert_eq!(history[0].product_name, "Product SKU-P");
        assert_eq!(history[0].quantity, 5);

        // The freed slot is first in line again.
        assert_eq!(receive(&s, p, 2).unwrap(), Coordinate::new(1, 1));
    }

    #[test]
    fn partial_picks_leave_location_occupied() {
        let s = setup(2, 2);
        let p = register(&s, "SKU-P");
        let at = receive(&s, p, 10).unwrap();

        pick(&s, at.aisle.into(), at.tier.into(), 3).unwrap();
        assert_eq!(pick(&s, at.aisle.into(), at.tier.into(), 3).unwrap(), 4);

        let slot = location_at(&s, at.aisle, at.tier);
        assert!(slot.is_occupied);
        assert_eq!(slot.quantity, 4);

        let picks: Vec<_> = s
            .reporting
            .transaction_history()
            .unwrap()
            .into_iter()
            .filter(|t| t.kind == TransactionKind::Pick)
            .map(|t| t.quantity)
            .collect();
        assert_eq!(picks, vec![3, 3]);
    }

    #[test]
    fn insufficient_quantity_leaves_location_unchanged() {
        let s = setup(2, 2);
        let p = register(&s, "SKU-P");
        receive(&s, p, 4).unwrap();
        let before = location_at(&s, 1, 1);

        let err = domain_err(pick(&s, 1, 1, 5));
        assert_eq!(
            err,
            DomainError::InsufficientQuantity {
                coordinate: Coordinate::new(1, 1),
                requested: 5,
                available: 4,
            }
        );
        assert_eq!(location_at(&s, 1, 1), before);
        assert_eq!(s.reporting.transaction_history().unwrap().len(), 1);
    }

    #[test]
    fn pick_failures_are_typed() {
        let s = setup(2, 2);
        let p = register(&s, "SKU-P");
        receive(&s, p, 4).unwrap();

        assert_eq!(domain_err(pick(&s, 1, 1, 0)), DomainError::InvalidQuantity(0));
        assert_eq!(
            domain_err(pick(&s, 3, 1, 1)),
            DomainError::LocationNotFound { aisle: 3, tier: 1 }
        );
        assert_eq!(
            domain_err(pick(&s, 0, -1, 1)),
            DomainError::LocationNotFound { aisle: 0, tier: -1 }
        );
        assert_eq!(
            domain_err(pick(&s, 2, 2, 1)),
            DomainError::LocationEmpty(Coordinate::new(2, 2))
        );
        assert_eq!(s.reporting.transaction_history().unwrap().len(), 1);
    }

    #[test]
    fn receive_validates_quantity_before_product() {
        let s = setup(1, 1);
        let missing = ProductId::new();

        assert_eq!(domain_err(receive(&s, missing, -2)), DomainError::InvalidQuantity(-2));
        assert_eq!(
            domain_err(receive(&s, missing, 2)),
            DomainError::ProductNotFound(missing)
        );
        assert!(s.reporting.transaction_history().unwrap().is_empty());
    }

    #[test]
    fn full_grid_rejects_receive_without_transaction() {
        let s = setup(1, 2);
        let p = register(&s, "SKU-P");
        receive(&s, p, 1).unwrap();
        receive(&s, p, 1).unwrap();

        assert_eq!(domain_err(receive(&s, p, 1)), DomainError::NoAvailableLocation);
        assert_eq!(s.reporting.transaction_history().unwrap().len(), 2);
    }

    #[test]
    fn occupancy_report_counts_occupied_locations() {
        let s = setup(2, 2);
        let p = register(&s, "SKU-P");
        receive(&s, p, 3).unwrap();

        let report = s.reporting.occupancy_report().unwrap();
        assert_eq!(report.total_locations, 4);
        assert_eq!(report.occupied_locations, 1);
        assert_eq!(report.available_locations, 3);
        assert_eq!(report.occupancy_percentage, 25.00);
    }

    #[test]
    fn history_is_newest_first() {
        let s = setup(3, 1);
        let a = register(&s, "A");
        let b = register(&s, "B");
        receive(&s, a, 1).unwrap();
        receive(&s, b, 2).unwrap();
        pick(&s, 1, 1, 1).unwrap();

        let history = s.reporting.transaction_history().unwrap();
        let kinds: Vec<_> = history.iter().map(|t| (t.kind, t.product_id)).collect();
        assert_eq!(
            kinds,
            vec![
                (TransactionKind::Pick, a),
                (TransactionKind::Receive, b),
                (TransactionKind::Receive, a),
            ]
        );
        assert!(history.windows(2).all(|w| w[0].sequence > w[1].sequence));
    }

    #[test]
    fn concurrent_receives_claim_distinct_locations() {
        const N: usize = 8;
        let s = Arc::new(services_on(
            Arc::new(InMemoryWarehouseStore::new()),
            LedgerConfig {
                max_conflict_retries: N as u32,
            },
        ));
        s.layout.configure(ConfigureWarehouse::new("Main", 2, 4)).unwrap();
        let p = register(&s, "SKU-P");
        let barrier = Arc::new(Barrier::new(N));

        let handles: Vec<_> = (0..N)
            .map(|_| {
                let s = Arc::clone(&s);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    receive(&s, p, 1)
                })
            })
            .collect();

        let claimed: Vec<Coordinate> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        let distinct: HashSet<_> = claimed.iter().copied().collect();
        assert_eq!(distinct.len(), N);

        let report = s.reporting.occupancy_report().unwrap();
        assert_eq!(report.occupied_locations, N as u64);
        assert_eq!(s.reporting.transaction_history().unwrap().len(), N);
    }

    #[test]
    fn concurrent_picks_never_overdraw() {
        const N: usize = 8;
        let s = Arc::new(services_on(
            Arc::new(InMemoryWarehouseStore::new()),
            LedgerConfig {
                max_conflict_retries: N as u32,
            },
        ));
        s.layout.configure(ConfigureWarehouse::new("Main", 1, 1)).unwrap();
        let p = register(&s, "SKU-P");
        receive(&s, p, 5).unwrap();
        let barrier = Arc::new(Barrier::new(N));

        let handles: Vec<_> = (0..N)
            .map(|_| {
                let s = Arc::clone(&s);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    pick(&s, 1, 1, 1)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(succeeded, 5);
        for r in results.iter().filter(|r| r.is_err()) {
            assert_eq!(
                r.as_ref().unwrap_err().domain(),
                Some(&DomainError::LocationEmpty(Coordinate::new(1, 1)))
            );
        }

        let slot = location_at(&s, 1, 1);
        assert!(!slot.is_occupied);
        assert_eq!(slot.quantity, 0);
    }

    /// Store wrapper that interferes with commits.
    ///
    /// Rejects the first `conflicts` commits as stale. A pending layout, if
    /// set, is swapped in right before the next commit reaches the store.
    #[derive(Clone)]
    struct ContendedStore {
        inner: Arc<InMemoryWarehouseStore>,
        conflicts: Arc<AtomicU32>,
        commit_attempts: Arc<AtomicU32>,
        pending_layout: Arc<Mutex<Option<(Warehouse, Vec<Location>)>>>,
    }

    impl ContendedStore {
        fn new(conflicts: u32) -> Self {
            Self {
                inner: Arc::new(InMemoryWarehouseStore::new()),
                conflicts: Arc::new(AtomicU32::new(conflicts)),
                commit_attempts: Arc::new(AtomicU32::new(0)),
                pending_layout: Arc::new(Mutex::new(None)),
            }
        }

        /// Arrange for a fresh `aisles × tiers` grid to replace the current one
        /// while the next stock movement is in flight.
        fn reconfigure_before_next_commit(&self, aisles: i64, tiers: i64) -> Warehouse {
            let now = Utc::now();
            let warehouse = Warehouse::configure(
                WarehouseId::new(),
                ConfigureWarehouse::new("Annex", aisles, tiers),
                now,
            )
            .unwrap();
            let locations = warehouse
                .dimensions()
                .coordinates()
                .map(|c| Location::vacant(LocationId::new(), warehouse.id_typed(), c, now))
                .collect();

            *self.pending_layout.lock().unwrap() = Some((warehouse.clone(), locations));
            warehouse
        }
    }

    impl WarehouseStore for ContendedStore {
        fn replace_layout(&self, warehouse: Warehouse, locations: Vec<Location>) -> Result<(), StoreError> {
            self.inner.replace_layout(warehouse, locations)
        }

        fn warehouse(&self) -> Result<Option<Warehouse>, StoreError> {
            self.inner.warehouse()
        }

        fn insert_product(&self, product: Product) -> Result<(), StoreError> {
            self.inner.insert_product(product)
        }

        fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
            self.inner.product(id)
        }

        fn products(&self) -> Result<Vec<Product>, StoreError> {
            self.inner.products()
        }

        fn first_vacant_location(&self) -> Result<Option<Location>, StoreError> {
            self.inner.first_vacant_location()
        }

        fn location_at(&self, coordinate: Coordinate) -> Result<Option<Location>, StoreError> {
            self.inner.location_at(coordinate)
        }

        fn commit(
            &self,
            commit: StockCommit,
            expected_version: ExpectedVersion,
        ) -> Result<Transaction, StoreError> {
            self.commit_attempts.fetch_add(1, Ordering::SeqCst);
            if let Some((warehouse, locations)) = self.pending_layout.lock().unwrap().take() {
                self.inner.replace_layout(warehouse, locations)?;
            }
            let stale = self
                .conflicts
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if stale {
                return Err(StoreError::Concurrency("injected".to_string()));
            }
            self.inner.commit(commit, expected_version)
        }

        fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
            self.inner.snapshot()
        }
    }

    #[test]
    fn stale_commits_are_retried_transparently() {
        let store = ContendedStore::new(2);
        let s = services_on(store.clone(), LedgerConfig::default());
        s.layout.configure(ConfigureWarehouse::new("Main", 1, 1)).unwrap();
        let p = register(&s, "SKU-P");

        assert_eq!(receive(&s, p, 2).unwrap(), Coordinate::new(1, 1));
        assert_eq!(store.commit_attempts.load(Ordering::SeqCst), 3);
        assert_eq!(s.reporting.transaction_history().unwrap().len(), 1);
    }

    #[test]
    fn exhausted_retries_surface_concurrent_conflict() {
        let store = ContendedStore::new(u32::MAX);
        let s = services_on(store.clone(), LedgerConfig { max_conflict_retries: 3 });
        s.layout.configure(ConfigureWarehouse::new("Main", 1, 1)).unwrap();
        let p = register(&s, "SKU-P");

        let err = domain_err(receive(&s, p, 2));
        assert!(matches!(err, DomainError::ConcurrentConflict(_)));
        assert_eq!(store.commit_attempts.load(Ordering::SeqCst), 4);
        assert!(s.reporting.transaction_history().unwrap().is_empty());
        assert!(!location_at(&s, 1, 1).is_occupied);
    }

    #[test]
    fn non_conflict_failures_are_not_retried() {
        let store = ContendedStore::new(0);
        let s = services_on(store.clone(), LedgerConfig::default());
        s.layout.configure(ConfigureWarehouse::new("Main", 1, 1)).unwrap();

        assert!(matches!(
            domain_err(pick(&s, 1, 1, 1)),
            DomainError::LocationEmpty(_)
        ));
        assert_eq!(store.commit_attempts.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn receive_lands_on_new_grid_when_reconfigured_mid_flight() {
        let store = ContendedStore::new(0);
        let s = services_on(store.clone(), LedgerConfig::default());
        s.layout.configure(ConfigureWarehouse::new("Main", 2, 2)).unwrap();
        let p = register(&s, "SKU-P");
        let old_ids: HashSet<_> = s.layout.list_locations().unwrap().iter().map(|l| l.id).collect();

        let annex = store.reconfigure_before_next_commit(2, 2);

        assert_eq!(receive(&s, p, 4).unwrap(), Coordinate::new(1, 1));
        assert_eq!(store.commit_attempts.load(Ordering::SeqCst), 2);
        assert_eq!(s.layout.current().unwrap().id_typed(), annex.id_typed());

        let slot = location_at(&s, 1, 1);
        assert!(!old_ids.contains(&slot.id));
        assert_eq!(slot.quantity, 4);

        let history = s.reporting.transaction_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].location_id, slot.id);
    }

    #[test]
    fn pick_sees_empty_new_grid_when_reconfigured_mid_flight() {
        let store = ContendedStore::new(0);
        let s = services_on(store.clone(), LedgerConfig::default());
        s.layout.configure(ConfigureWarehouse::new("Main", 2, 2)).unwrap();
        let p = register(&s, "SKU-P");
        receive(&s, p, 4).unwrap();

        store.reconfigure_before_next_commit(2, 2);

        assert_eq!(
            domain_err(pick(&s, 1, 1, 1)),
            DomainError::LocationEmpty(Coordinate::new(1, 1))
        );
        assert!(s.reporting.transaction_history().unwrap().is_empty());
        assert!(s.layout.list_locations().unwrap().iter().all(|l| !l.is_occupied));
    }

    #[derive(Debug, Clone)]
    enum StockOp {
        Receive(i64),
        Pick { aisle: i64, tier: i64, quantity: i64 },
    }

    fn stock_op() -> impl Strategy<Value = StockOp> {
        prop_oneof![
            (1i64..=20).prop_map(StockOp::Receive),
            (1i64..=3, 1i64..=3, 1i64..=20)
                .prop_map(|(aisle, tier, quantity)| StockOp::Pick { aisle, tier, quantity }),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of receives and picks, each location's
        /// stock equals its received minus picked units in the history, and
        /// only successful movements are recorded.
        #[test]
        fn location_stock_reconciles_with_history(
            ops in prop::collection::vec(stock_op(), 0..40)
        ) {
            let s = setup(2, 2);
            let p = register(&s, "SKU-P");

            let mut succeeded = 0usize;
            for op in ops {
                let result = match op {
                    StockOp::Receive(quantity) => receive(&s, p, quantity).map(|_| ()),
                    StockOp::Pick { aisle, tier, quantity } => {
                        pick(&s, aisle, tier, quantity).map(|_| ())
                    }
                };
                if result.is_ok() {
                    succeeded += 1;
                }
            }

            let history = s.reporting.transaction_history().unwrap();
            prop_assert_eq!(history.len(), succeeded);

            let mut net: HashMap<LocationId, i64> = HashMap::new();
            for t in &history {
                let signed = match t.kind {
                    TransactionKind::Receive => t.quantity as i64,
                    TransactionKind::Pick => -(t.quantity as i64),
                };
                *net.entry(t.location_id).or_default() += signed;
            }

            for l in s.layout.list_locations().unwrap() {
                prop_assert_eq!(net.get(&l.id).copied().unwrap_or(0), l.quantity as i64);
                prop_assert_eq!(l.is_occupied, l.quantity > 0);
                prop_assert_eq!(l.product_id.is_some(), l.is_occupied);
            }
        }
    }
}
