//! Implementations of the core crate's [`CustomerStore`] port.
//!
//! `SqlCustomerStore` is the production store over SQLite;
//! `InMemoryCustomerStore` backs tests and any embedding that wants to run
//! without a database file.

pub mod customer;
pub mod memory;

pub use customer::SqlCustomerStore;
pub use memory::InMemoryCustomerStore;

use rolodex_core::store::StoreError;

/// SQLite reports constraint violations as database errors with an extended
/// code; everything else is an opaque backend failure as far as core cares.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> StoreError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            StoreError::Conflict(db_error.message().to_string())
        }
        _ => StoreError::Backend(error.to_string()),
    }
}
