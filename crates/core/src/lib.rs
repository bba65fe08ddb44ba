pub mod config;
pub mod domain;
pub mod errors;
pub mod service;
pub mod store;
pub mod validation;

pub use domain::customer::{Customer, CustomerDetails, CustomerId};
pub use errors::CustomerError;
pub use service::CustomerService;
pub use store::{CustomerStore, StoreError};
pub use validation::{DigitFormat, IdentityRule};
