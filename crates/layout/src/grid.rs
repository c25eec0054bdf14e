use serde::{Deserialize, Serialize};

use rackline_core::{Coordinate, DomainError, DomainResult};

/// Upper bound on `aisles * tiers` for a single configure call.
pub const MAX_GRID_LOCATIONS: u64 = 1_000_000;

/// Validated warehouse dimensions (both counts ≥ 1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    aisles: u32,
    tiers: u32,
}

impl GridDimensions {
    pub fn new(aisle_count: i64, tier_count: i64) -> DomainResult<Self> {
        let aisles = Self::count("aisle_count", aisle_count)?;
        let tiers = Self::count("tier_count", tier_count)?;

        let total = u64::from(aisles) * u64::from(tiers);
        if total > MAX_GRID_LOCATIONS {
            return Err(DomainError::invalid_dimension(format!(
                "grid of {total} locations exceeds the limit of {MAX_GRID_LOCATIONS}"
            )));
        }

        Ok(Self { aisles, tiers })
    }

    fn count(field: &str, value: i64) -> DomainResult<u32> {
        if value < 1 {
            return Err(DomainError::invalid_dimension(format!(
                "{field} must be at least 1, got {value}"
            )));
        }
        u32::try_from(value)
            .map_err(|_| DomainError::invalid_dimension(format!("{field} is too large: {value}")))
    }

    pub fn aisles(&self) -> u32 {
        self.aisles
    }

    pub fn tiers(&self) -> u32 {
        self.tiers
    }

    pub fn location_count(&self) -> u64 {
        u64::from(self.aisles) * u64::from(self.tiers)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (1..=self.aisles).contains(&coordinate.aisle) && (1..=self.tiers).contains(&coordinate.tier)
    }

    /// Every coordinate of the grid, in `(aisle, tier)` order.
    pub fn coordinates(self) -> impl Iterator<Item = Coordinate> {
        let tiers = self.tiers;
        (1..=self.aisles).flat_map(move |aisle| (1..=tiers).map(move |tier| Coordinate::new(aisle, tier)))
    }
}
