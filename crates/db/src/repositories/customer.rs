use async_trait::async_trait;
use sqlx::Row;

use rolodex_core::domain::customer::{Customer, CustomerDetails, CustomerId};
use rolodex_core::store::{CustomerStore, StoreError};

use super::map_sqlx_error;
use crate::DbPool;

pub struct SqlCustomerStore {
    pool: DbPool,
}

impl SqlCustomerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_customer(row: &sqlx::sqlite::SqliteRow) -> Customer {
    Customer {
        id: CustomerId(row.get::<i64, _>("id")),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        phone_number: row.get("phone_number"),
        identification_number: row.get("identification_number"),
    }
}

#[async_trait]
impl CustomerStore for SqlCustomerStore {
    async fn insert(&self, details: &CustomerDetails) -> Result<Customer, StoreError> {
        let result = sqlx::query(
            "INSERT INTO customer (first_name, last_name, phone_number, identification_number)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(&details.phone_number)
        .bind(&details.identification_number)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Customer {
            id: CustomerId(result.last_insert_rowid()),
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            phone_number: details.phone_number.clone(),
            identification_number: details.identification_number.clone(),
        })
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, phone_number, identification_number
             FROM customer WHERE id = ?",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.as_ref().map(row_to_customer))
    }

    async fn find_by_identification_number(
        &self,
        identification_number: &str,
    ) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, phone_number, identification_number
             FROM customer WHERE identification_number = ?",
        )
        .bind(identification_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.as_ref().map(row_to_customer))
    }

    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, phone_number, identification_number
             FROM customer ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_customer).collect())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}
