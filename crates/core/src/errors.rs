use thiserror::Error;

use crate::domain::customer::CustomerId;
use crate::store::StoreError;

/// Failures surfaced by the customer service. Each variant is scoped to a
/// single request; none is fatal to the process.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CustomerError {
    #[error("identification number is not valid")]
    InvalidIdentificationNumber,
    #[error("a customer with identification number `{0}` already exists")]
    AlreadyExists(String),
    #[error("customer `{0}` not found")]
    NotFound(CustomerId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
