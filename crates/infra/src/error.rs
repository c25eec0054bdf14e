//! Service-level error mapping.

use thiserror::Error;

use rackline_core::DomainError;

use crate::store::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error returned by every service operation.
///
/// Domain failures are surfaced verbatim. Store failures that have a domain
/// meaning (stale commit, SKU collision) are folded into `Domain` so callers
/// only match one taxonomy; the rest stay `Store`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("store failure: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Concurrency(msg) => ServiceError::Domain(DomainError::ConcurrentConflict(msg)),
            StoreError::DuplicateSku(sku) => ServiceError::Domain(DomainError::DuplicateSku(sku)),
            other => ServiceError::Store(other),
        }
    }
}

impl ServiceError {
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            ServiceError::Domain(e) => Some(e),
            ServiceError::Store(_) => None,
        }
    }

    /// Stale-read failure that the ledger may retry.
    pub fn is_conflict(&self) -> bool {
        self.domain().is_some_and(DomainError::is_transient)
    }
}
