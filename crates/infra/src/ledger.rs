//! Inventory ledger: the only writer of location stock and transactions.
//!
//! Every stock movement runs the same pipeline:
//!
//! ```text
//! Request
//!   ↓
//! 1. Validate input (quantity, coordinate) and resolve the product
//!   ↓
//! 2. Load the target location (versioned)
//!   ↓
//! 3. Decide + apply on a copy (pure `Location` aggregate)
//!   ↓
//! 4. Commit {next location, transaction} with ExpectedVersion::Exact(loaded)
//!   ↓
//! 5. On a stale commit, go back to 2 (bounded)
//! ```
//!
//! Validation failures never reach the store, and a rejected commit leaves the
//! store untouched, so no partial mutation is observable.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use rackline_core::{
    AggregateRoot, Coordinate, DomainError, ExpectedVersion, ProductId, Quantity, TransactionId,
};
use rackline_inventory::{Location, PickStock, ReceiveStock, StockCommand, Transaction};

use crate::config::LedgerConfig;
use crate::error::ServiceResult;
use crate::store::{StockCommit, WarehouseStore};

/// Input: put `quantity` units of a product into the next free slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Input: take `quantity` units out of the slot at `(aisle, tier)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRequest {
    pub aisle: i64,
    pub tier: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiveReceipt {
    pub coordinate: Coordinate,
    pub transaction_id: TransactionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickReceipt {
    pub transaction_id: TransactionId,
    /// Units left in the slot (0 means it was freed).
    pub remaining: u64,
}

#[derive(Debug, Clone)]
pub struct Ledger<S> {
    store: S,
    config: LedgerConfig,
}

impl<S> Ledger<S> {
    pub fn new(store: S, config: LedgerConfig) -> Self {
        Self { store, config }
    }
}

impl<S> Ledger<S>
where
    S: WarehouseStore,
{
    /// Receive stock into the free location with the lowest `(aisle, tier)`.
    #[instrument(skip(self, request), fields(product_id = %request.product_id, quantity = request.quantity), err)]
    pub fn receive(&self, request: ReceiveRequest) -> ServiceResult<ReceiveReceipt> {
        let quantity = Quantity::new(request.quantity)?;
        let product_id = request.product_id;

        // Products are immutable and never deleted, so one lookup suffices.
        if self.store.product(product_id)?.is_none() {
            return Err(DomainError::ProductNotFound(product_id).into());
        }

        let receipt = self.with_conflict_retry("receive", || {
            let location = self
                .store
                .first_vacant_location()?
                .ok_or(DomainError::NoAvailableLocation)?;

            let command = StockCommand::Receive(ReceiveStock {
                product_id,
                quantity,
                occurred_at: Utc::now(),
            });
            let (transaction, _) = self.execute(&location, &command)?;

            Ok(ReceiveReceipt {
                coordinate: location.coordinate(),
                transaction_id: transaction.id,
            })
        })?;

        info!(location = %receipt.coordinate, "stock received");
        Ok(receipt)
    }

    /// Pick stock from one location; the whole quantity must be available there.
    #[instrument(skip(self, request), fields(aisle = request.aisle, tier = request.tier, quantity = request.quantity), err)]
    pub fn pick(&self, request: PickRequest) -> ServiceResult<PickReceipt> {
        let quantity = Quantity::new(request.quantity)?;
        let not_found = || DomainError::location_not_found(request.aisle, request.tier);
        let coordinate = Coordinate::from_signed(request.aisle, request.tier).ok_or_else(not_found)?;

        let receipt = self.with_conflict_retry("pick", || {
            let location = self.store.location_at(coordinate)?.ok_or_else(not_found)?;

            let command = StockCommand::Pick(PickStock {
                quantity,
                occurred_at: Utc::now(),
            });
            let (transaction, next) = self.execute(&location, &command)?;

            Ok(PickReceipt {
                transaction_id: transaction.id,
                remaining: next.quantity(),
            })
        })?;

        info!(location = %coordinate, remaining = receipt.remaining, "stock picked");
        Ok(receipt)
    }

    /// Decide against `location` and commit only if it is still current.
    fn execute(
        &self,
        location: &Location,
        command: &StockCommand,
    ) -> ServiceResult<(Transaction, Location)> {
        let outcome = location.execute(command, TransactionId::new())?;
        let next = outcome.location.clone();

        let committed = self.store.commit(
            StockCommit {
                location: outcome.location,
                transaction: outcome.transaction,
            },
            ExpectedVersion::Exact(location.version()),
        )?;

        debug!(
            event_type = outcome.event.event_type(),
            transaction_id = %committed.id,
            sequence = committed.sequence,
            "stock movement committed"
        );
        Ok((committed, next))
    }

    fn with_conflict_retry<T>(
        &self,
        operation: &'static str,
        mut attempt: impl FnMut() -> ServiceResult<T>,
    ) -> ServiceResult<T> {
        let mut retries = 0u32;
        loop {
            match attempt() {
                Err(e) if e.is_conflict() && retries < self.config.max_conflict_retries => {
                    retries += 1;
                    warn!(operation, retries, error = %e, "stale read, retrying");
                }
                Err(e) if e.is_conflict() => {
                    warn!(operation, retries, "conflict retries exhausted");
                    return Err(e);
                }
                other => return other,
            }
        }
    }
}
