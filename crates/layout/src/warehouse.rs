use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rackline_core::{Coordinate, DomainError, DomainResult, Entity, WarehouseId};

use crate::grid::GridDimensions;

/// Command: ConfigureWarehouse.
///
/// Counts arrive as signed integers so that out-of-range input surfaces as
/// `InvalidDimension` rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigureWarehouse {
    pub name: String,
    pub aisle_count: i64,
    pub tier_count: i64,
}

impl ConfigureWarehouse {
    pub fn new(name: impl Into<String>, aisle_count: i64, tier_count: i64) -> Self {
        Self {
            name: name.into(),
            aisle_count,
            tier_count,
        }
    }
}

/// The single active warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    name: String,
    dimensions: GridDimensions,
    created_at: DateTime<Utc>,
}

impl Warehouse {
    pub fn configure(
        id: WarehouseId,
        cmd: ConfigureWarehouse,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let dimensions = GridDimensions::new(cmd.aisle_count, cmd.tier_count)?;
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("warehouse name cannot be empty"));
        }

        Ok(Self {
            id,
            name: cmd.name,
            dimensions,
            created_at,
        })
    }

    pub fn id_typed(&self) -> WarehouseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn aisle_count(&self) -> u32 {
        self.dimensions.aisles()
    }

    pub fn tier_count(&self) -> u32 {
        self.dimensions.tiers()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.dimensions.contains(coordinate)
    }
}

impl Entity for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
