//! Customer endpoints.
//!
//! - `POST   /api/v1/customers`      — create a customer (201)
//! - `GET    /api/v1/customers`      — list customers (200)
//! - `GET    /api/v1/customers/{id}` — fetch one customer (200)
//! - `DELETE /api/v1/customers/{id}` — delete a customer (204)
//!
//! Service outcomes map onto status codes: invalid identification number is
//! 400, a duplicate identification number is 409, an unknown id is 404, and a
//! store failure is 503 with the detail kept in the log.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::error;

use rolodex_core::domain::customer::{Customer, CustomerDetails, CustomerId};
use rolodex_core::errors::CustomerError;
use rolodex_core::service::CustomerService;
use rolodex_core::validation::DigitFormat;
use rolodex_db::{DbPool, SqlCustomerStore};

#[derive(Clone)]
pub struct CustomersState {
    service: CustomerService,
}

impl CustomersState {
    pub fn new(service: CustomerService) -> Self {
        Self { service }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

pub fn router(db_pool: DbPool) -> Router {
    let service =
        CustomerService::new(Arc::new(SqlCustomerStore::new(db_pool)), Arc::new(DigitFormat));

    Router::new()
        .route("/api/v1/customers", get(list_customers).post(create_customer))
        .route("/api/v1/customers/{id}", get(get_customer).delete(delete_customer))
        .with_state(CustomersState::new(service))
}

fn map_customer_error(error: CustomerError) -> (StatusCode, Json<ApiError>) {
    match error {
        CustomerError::InvalidIdentificationNumber => {
            (StatusCode::BAD_REQUEST, Json(ApiError { error: error.to_string() }))
        }
        CustomerError::AlreadyExists(_) => {
            (StatusCode::CONFLICT, Json(ApiError { error: error.to_string() }))
        }
        CustomerError::NotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ApiError { error: error.to_string() }))
        }
        CustomerError::Store(store_error) => {
            error!(
                event_name = "customer.store_error",
                error = %store_error,
                "customer store failure"
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiError { error: "customer store is unavailable".to_string() }),
            )
        }
    }
}

async fn create_customer(
    State(state): State<CustomersState>,
    Json(details): Json<CustomerDetails>,
) -> Result<(StatusCode, Json<Customer>), (StatusCode, Json<ApiError>)> {
    let customer = state.service.create(details).await.map_err(map_customer_error)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn list_customers(
    State(state): State<CustomersState>,
) -> Result<Json<Vec<CustomerDetails>>, (StatusCode, Json<ApiError>)> {
    let customers = state.service.list().await.map_err(map_customer_error)?;
    Ok(Json(customers))
}

async fn get_customer(
    State(state): State<CustomersState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerDetails>, (StatusCode, Json<ApiError>)> {
    let details =
        state.service.get_by_id(CustomerId(id)).await.map_err(map_customer_error)?;
    Ok(Json(details))
}

async fn delete_customer(
    State(state): State<CustomersState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    state.service.delete_by_id(CustomerId(id)).await.map_err(map_customer_error)?;
    Ok(StatusCode::NO_CONTENT)
}
