//! Catalog service: product registration and lookup.

use chrono::Utc;
use tracing::{info, instrument};

use rackline_catalog::{Product, RegisterProduct};
use rackline_core::{DomainError, ProductId};

use crate::error::ServiceResult;
use crate::store::WarehouseStore;

#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    store: S,
}

impl<S> CatalogService<S>
where
    S: WarehouseStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a product; fails with `DuplicateSku` if the SKU is taken.
    #[instrument(skip(self, cmd), fields(sku = %cmd.sku), err)]
    pub fn register(&self, cmd: RegisterProduct) -> ServiceResult<ProductId> {
        let product = Product::register(ProductId::new(), cmd, Utc::now())?;
        let product_id = product.id_typed();

        self.store.insert_product(product)?;

        info!(%product_id, "product registered");
        Ok(product_id)
    }

    pub fn list(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.store.products()?)
    }

    pub fn lookup(&self, product_id: ProductId) -> ServiceResult<Product> {
        Ok(self
            .store
            .product(product_id)?
            .ok_or(DomainError::ProductNotFound(product_id))?)
    }
}
