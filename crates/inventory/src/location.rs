use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rackline_core::{
    Aggregate, AggregateRoot, Coordinate, DomainError, LocationId, ProductId, Quantity,
    TransactionId, WarehouseId,
};

use crate::transaction::NewTransaction;

/// What a location currently holds.
///
/// A vacant slot has no product and zero quantity; an occupied slot always
/// has a product and a positive quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Occupancy {
    Vacant,
    Occupied { product_id: ProductId, quantity: Quantity },
}

/// Aggregate root: Location (one aisle/tier slot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    warehouse_id: WarehouseId,
    coordinate: Coordinate,
    occupancy: Occupancy,
    created_at: DateTime<Utc>,
    version: u64,
}

impl Location {
    /// A freshly materialized, empty slot.
    pub fn vacant(
        id: LocationId,
        warehouse_id: WarehouseId,
        coordinate: Coordinate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            warehouse_id,
            coordinate,
            occupancy: Occupancy::Vacant,
            created_at,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> LocationId {
        self.id
    }

    pub fn warehouse_id(&self) -> WarehouseId {
        self.warehouse_id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self.occupancy, Occupancy::Occupied { .. })
    }

    pub fn product_id(&self) -> Option<ProductId> {
        match self.occupancy {
            Occupancy::Vacant => None,
            Occupancy::Occupied { product_id, .. } => Some(product_id),
        }
    }

    /// Units on hand (0 when vacant).
    pub fn quantity(&self) -> u64 {
        match self.occupancy {
            Occupancy::Vacant => 0,
            Occupancy::Occupied { quantity, .. } => quantity.get(),
        }
    }

    /// Decide and apply one command, yielding the next state and its audit record.
    ///
    /// `self` is left untouched; callers commit the returned state only if the
    /// store still holds `self.version()`.
    pub fn execute(
        &self,
        command: &StockCommand,
        transaction_id: TransactionId,
    ) -> Result<StockOutcome, DomainError> {
        let events = self.handle(command)?;
        let mut next = self.clone();
        for event in &events {
            next.apply(event);
        }

        let event = events
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::validation("stock command produced no event"))?;
        let transaction = NewTransaction::from_event(transaction_id, &event);

        Ok(StockOutcome {
            location: next,
            event,
            transaction,
        })
    }
}

impl AggregateRoot for Location {
    type Id = LocationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Result of executing a stock command against a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockOutcome {
    pub location: Location,
    pub event: StockEvent,
    pub transaction: NewTransaction,
}

/// Command: ReceiveStock (put a lot into this slot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveStock {
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Command: PickStock (remove units from this slot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickStock {
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockCommand {
    Receive(ReceiveStock),
    Pick(PickStock),
}

/// Event: StockReceived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReceived {
    pub location_id: LocationId,
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockPicked.
///
/// `product_id` is the occupant before the pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPicked {
    pub location_id: LocationId,
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub remaining: u64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEvent {
    Received(StockReceived),
    Picked(StockPicked),
}

impl StockEvent {
    /// Stable event name, used in logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            StockEvent::Received(_) => "inventory.stock.received",
            StockEvent::Picked(_) => "inventory.stock.picked",
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StockEvent::Received(e) => e.occurred_at,
            StockEvent::Picked(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Location {
    type Command = StockCommand;
    type Event = StockEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StockEvent::Received(e) => {
                self.occupancy = Occupancy::Occupied {
                    product_id: e.product_id,
                    quantity: e.quantity,
                };
            }
            StockEvent::Picked(e) => {
                self.occupancy = match Quantity::new(e.remaining as i64) {
                    Ok(quantity) => Occupancy::Occupied {
                        product_id: e.product_id,
                        quantity,
                    },
                    Err(_) => Occupancy::Vacant,
                };
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StockCommand::Receive(cmd) => self.handle_receive(cmd),
            StockCommand::Pick(cmd) => self.handle_pick(cmd),
        }
    }
}

impl Location {
    fn handle_receive(&self, cmd: &ReceiveStock) -> Result<Vec<StockEvent>, DomainError> {
        // The ledger only targets slots it read as vacant; an occupied slot here
        // means another writer claimed it first.
        if self.is_occupied() {
            return Err(DomainError::conflict(format!(
                "{} was claimed by another receive",
                self.coordinate
            )));
        }

        Ok(vec![StockEvent::Received(StockReceived {
            location_id: self.id,
            product_id: cmd.product_id,
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_pick(&self, cmd: &PickStock) -> Result<Vec<StockEvent>, DomainError> {
        let (product_id, on_hand) = match self.occupancy {
            Occupancy::Vacant => return Err(DomainError::LocationEmpty(self.coordinate)),
            Occupancy::Occupied { product_id, quantity } => (product_id, quantity.get()),
        };

        let requested = cmd.quantity.get();
        if requested > on_hand {
            return Err(DomainError::InsufficientQuantity {
                coordinate: self.coordinate,
                requested,
                available: on_hand,
            });
        }

        Ok(vec![StockEvent::Picked(StockPicked {
            location_id: self.id,
            product_id,
            quantity: cmd.quantity,
            remaining: on_hand - requested,
            occurred_at: cmd.occurred_at,
        })])
    }
}
