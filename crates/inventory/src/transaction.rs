use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rackline_core::{Entity, LocationId, ProductId, Quantity, TransactionId};

use crate::location::StockEvent;

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Receive,
    Pick,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Receive => "receive",
            TransactionKind::Pick => "pick",
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction ready to be appended to the ledger (no sequence yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub product_id: ProductId,
    pub location_id: LocationId,
    pub quantity: Quantity,
    pub timestamp: DateTime<Utc>,
}

impl NewTransaction {
    /// Audit record for a stock event.
    ///
    /// For picks the product is the one that occupied the location before the
    /// decrement, which the event carries even when the slot was emptied.
    pub fn from_event(id: TransactionId, event: &StockEvent) -> Self {
        let (kind, product_id, location_id, quantity) = match event {
            StockEvent::Received(e) => (TransactionKind::Receive, e.product_id, e.location_id, e.quantity),
            StockEvent::Picked(e) => (TransactionKind::Pick, e.product_id, e.location_id, e.quantity),
        };

        Self {
            id,
            kind,
            product_id,
            location_id,
            quantity,
            timestamp: event.occurred_at(),
        }
    }

    /// Seal the record with its ledger position.
    pub fn into_committed(self, sequence: u64) -> Transaction {
        Transaction {
            id: self.id,
            sequence,
            kind: self.kind,
            product_id: self.product_id,
            location_id: self.location_id,
            quantity: self.quantity,
            timestamp: self.timestamp,
        }
    }
}

/// An immutable, committed ledger entry.
///
/// `sequence` is assigned by the store and strictly increases with every
/// append, so it orders history independently of clock resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub sequence: u64,
    pub kind: TransactionKind,
    pub product_id: ProductId,
    pub location_id: LocationId,
    pub quantity: Quantity,
    pub timestamp: DateTime<Utc>,
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
