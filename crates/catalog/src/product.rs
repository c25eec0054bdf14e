use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rackline_core::{DomainError, DomainResult, Entity, ProductId};

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    sku: String,
    description: String,
    created_at: DateTime<Utc>,
}

/// Command: RegisterProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterProduct {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub description: String,
}

impl RegisterProduct {
    pub fn new(name: impl Into<String>, sku: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            description: description.into(),
        }
    }

    /// Shape checks that do not need the rest of the catalog.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        Ok(())
    }
}

impl Product {
    /// Build a product from a validated registration.
    ///
    /// The SKU is stored verbatim; comparison elsewhere is exact and
    /// case-sensitive.
    pub fn register(
        id: ProductId,
        cmd: RegisterProduct,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        cmd.validate()?;
        Ok(Self {
            id,
            name: cmd.name,
            sku: cmd.sku,
            description: cmd.description,
            created_at,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
