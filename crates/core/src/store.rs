use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::{Customer, CustomerDetails, CustomerId};

/// Persistence failures surfaced by a [`CustomerStore`]. Kept free of any
/// concrete driver type so the core crate stays storage agnostic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
    /// A storage-level uniqueness constraint rejected the write. This is the
    /// backstop for two concurrent creates racing past the service-level
    /// duplicate check.
    #[error("store uniqueness conflict: {0}")]
    Conflict(String),
}

/// Port through which the customer service reaches durable storage.
///
/// Single-row operations are expected to be atomic; `insert` must observe the
/// unique identification-number constraint and report a violation as
/// [`StoreError::Conflict`].
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Persists the four business fields and returns the record with its
    /// store-assigned id.
    async fn insert(&self, details: &CustomerDetails) -> Result<Customer, StoreError>;

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    async fn find_by_identification_number(
        &self,
        identification_number: &str,
    ) -> Result<Option<Customer>, StoreError>;

    /// All customers in the store's natural retrieval order.
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError>;

    /// Removes the row. Absence of the id is not an error at this layer; the
    /// service checks existence first.
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError>;
}
