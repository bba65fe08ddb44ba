use std::collections::BTreeMap;

use tokio::sync::RwLock;

use rolodex_core::domain::customer::{Customer, CustomerDetails, CustomerId};
use rolodex_core::store::{CustomerStore, StoreError};

/// Store substitute holding customers in process memory. Mirrors the SQL
/// store's contract, including the identification-number uniqueness conflict,
/// so service and handler tests exercise the same paths.
#[derive(Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Customer>,
    next_id: i64,
}

#[async_trait::async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, details: &CustomerDetails) -> Result<Customer, StoreError> {
        let mut inner = self.inner.write().await;
        if inner
            .rows
            .values()
            .any(|customer| customer.identification_number == details.identification_number)
        {
            return Err(StoreError::Conflict(format!(
                "identification number `{}` already present",
                details.identification_number
            )));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        let customer = Customer {
            id: CustomerId(id),
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            phone_number: details.phone_number.clone(),
            identification_number: details.identification_number.clone(),
        };
        inner.rows.insert(id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id.0).cloned())
    }

    async fn find_by_identification_number(
        &self,
        identification_number: &str,
    ) -> Result<Option<Customer>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .values()
            .find(|customer| customer.identification_number == identification_number)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id.0);
        Ok(())
    }
}
