//! Value objects: equality by value, not identity.
//!
//! Value objects have **no identity**; two with the same attributes are equal.
//! They are immutable: to "change" one, build a new one.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Requires `Clone + PartialEq + Debug` so values can be copied around,
/// compared by attribute and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Grid address of a storage location (1-based).
///
/// Ordering is lexicographic on `(aisle, tier)`, which is the order the
/// ledger uses to pick the next free slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub aisle: u32,
    pub tier: u32,
}

impl ValueObject for Coordinate {}

impl Coordinate {
    pub fn new(aisle: u32, tier: u32) -> Self {
        Self { aisle, tier }
    }

    /// Convert caller-supplied coordinates; `None` when either is not a valid
    /// 1-based grid index.
    pub fn from_signed(aisle: i64, tier: i64) -> Option<Self> {
        let aisle = u32::try_from(aisle).ok().filter(|a| *a >= 1)?;
        let tier = u32::try_from(tier).ok().filter(|t| *t >= 1)?;
        Some(Self { aisle, tier })
    }

    /// Human-readable label, e.g. `"Aisle 2, Tier 3"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aisle {}, Tier {}", self.aisle, self.tier)
    }
}

/// Strictly positive unit count moved by a receive or pick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Quantity(u64);

impl ValueObject for Quantity {}

impl Quantity {
    /// Validate a caller-supplied quantity.
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::InvalidQuantity(value));
        }
        Ok(Self(value as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
