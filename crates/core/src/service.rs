//! Orchestration for the four customer operations: create, list, get, delete.
//!
//! The service owns the entity-to-transfer mapping and the create-time
//! validation and uniqueness checks. Storage and the identification-number
//! rule are constructor-injected behind their traits, so any store engine and
//! any national-id format plug in without changes here.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::customer::{Customer, CustomerDetails, CustomerId};
use crate::errors::CustomerError;
use crate::store::{CustomerStore, StoreError};
use crate::validation::IdentityRule;

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
    identity_rule: Arc<dyn IdentityRule>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>, identity_rule: Arc<dyn IdentityRule>) -> Self {
        Self { store, identity_rule }
    }

    /// Validates and persists a new customer, returning it with the assigned
    /// id. Both the format check and the uniqueness check run before any
    /// write, so a failed create leaves the store untouched.
    pub async fn create(&self, details: CustomerDetails) -> Result<Customer, CustomerError> {
        if !self.identity_rule.is_valid(&details.identification_number) {
            warn!(
                event_name = "customer.create.invalid_identification_number",
                "create rejected by identification-number rule"
            );
            return Err(CustomerError::InvalidIdentificationNumber);
        }

        if self
            .store
            .find_by_identification_number(&details.identification_number)
            .await?
            .is_some()
        {
            return Err(CustomerError::AlreadyExists(details.identification_number));
        }

        let customer = match self.store.insert(&details).await {
            Ok(customer) => customer,
            // Unique-constraint backstop: a concurrent create won the race
            // between our duplicate check and the insert.
            Err(StoreError::Conflict(_)) => {
                return Err(CustomerError::AlreadyExists(details.identification_number));
            }
            Err(error) => return Err(error.into()),
        };

        info!(
            event_name = "customer.created",
            customer_id = %customer.id,
            "customer record created"
        );
        Ok(customer)
    }

    /// All customers mapped to their transfer shape, in the store's natural
    /// retrieval order. Empty stores yield an empty vec.
    pub async fn list(&self) -> Result<Vec<CustomerDetails>, CustomerError> {
        let customers = self.store.find_all().await?;
        Ok(customers.iter().map(CustomerDetails::from).collect())
    }

    /// Maps all four business fields from the fetched customer.
    pub async fn get_by_id(&self, id: CustomerId) -> Result<CustomerDetails, CustomerError> {
        let customer = self.store.find_by_id(id).await?.ok_or(CustomerError::NotFound(id))?;
        Ok(CustomerDetails::from(&customer))
    }

    /// Removes the customer, failing with `NotFound` (and deleting nothing)
    /// when the id was never assigned or is already gone.
    pub async fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(CustomerError::NotFound(id));
        }
        self.store.delete_by_id(id).await?;
        info!(event_name = "customer.deleted", customer_id = %id, "customer record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use super::CustomerService;
    use crate::domain::customer::{Customer, CustomerDetails, CustomerId};
    use crate::errors::CustomerError;
    use crate::store::{CustomerStore, StoreError};
    use crate::validation::DigitFormat;

    /// Test double standing in for the database, with a switch that makes the
    /// insert report a uniqueness conflict regardless of contents.
    #[derive(Default)]
    struct TestStore {
        rows: RwLock<BTreeMap<i64, Customer>>,
        next_id: RwLock<i64>,
        conflict_on_insert: bool,
    }

    impl TestStore {
        async fn len(&self) -> usize {
            self.rows.read().await.len()
        }
    }

    #[async_trait]
    impl CustomerStore for TestStore {
        async fn insert(&self, details: &CustomerDetails) -> Result<Customer, StoreError> {
            if self.conflict_on_insert {
                return Err(StoreError::Conflict(
                    "UNIQUE constraint failed: customer.identification_number".to_string(),
                ));
            }
            let mut next_id = self.next_id.write().await;
            *next_id += 1;
            let customer = Customer {
                id: CustomerId(*next_id),
                first_name: details.first_name.clone(),
                last_name: details.last_name.clone(),
                phone_number: details.phone_number.clone(),
                identification_number: details.identification_number.clone(),
            };
            self.rows.write().await.insert(*next_id, customer.clone());
            Ok(customer)
        }

        async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
            Ok(self.rows.read().await.get(&id.0).cloned())
        }

        async fn find_by_identification_number(
            &self,
            identification_number: &str,
        ) -> Result<Option<Customer>, StoreError> {
            Ok(self
                .rows
                .read()
                .await
                .values()
                .find(|customer| customer.identification_number == identification_number)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
            Ok(self.rows.read().await.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: CustomerId) -> Result<(), StoreError> {
            self.rows.write().await.remove(&id.0);
            Ok(())
        }
    }

    fn service(store: Arc<TestStore>) -> CustomerService {
        CustomerService::new(store, Arc::new(DigitFormat))
    }

    fn details(identification_number: &str) -> CustomerDetails {
        CustomerDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "5551234567".to_string(),
            identification_number: identification_number.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_copies_business_fields() {
        let store = Arc::new(TestStore::default());
        let created = service(store.clone())
            .create(details("12345678901"))
            .await
            .expect("create should succeed");

        assert_eq!(created.id, CustomerId(1));
        assert_eq!(created.first_name, "Ada");
        assert_eq!(created.last_name, "Lovelace");
        assert_eq!(created.phone_number, "5551234567");
        assert_eq!(created.identification_number, "12345678901");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_identification_number_without_writing() {
        let store = Arc::new(TestStore::default());
        let result = service(store.clone()).create(details("not-a-number")).await;

        assert_eq!(result, Err(CustomerError::InvalidIdentificationNumber));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_identification_number_without_writing() {
        let store = Arc::new(TestStore::default());
        let svc = service(store.clone());

        svc.create(details("12345678901")).await.expect("first create");
        let result = svc.create(details("12345678901")).await;

        assert_eq!(result, Err(CustomerError::AlreadyExists("12345678901".to_string())));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn create_maps_store_conflict_to_already_exists() {
        let store =
            Arc::new(TestStore { conflict_on_insert: true, ..TestStore::default() });
        let result = service(store).create(details("12345678901")).await;

        assert_eq!(result, Err(CustomerError::AlreadyExists("12345678901".to_string())));
    }

    #[tokio::test]
    async fn get_by_id_returns_every_field_of_the_fetched_customer() {
        let store = Arc::new(TestStore::default());
        let svc = service(store);
        let created = svc.create(details("12345678901")).await.expect("create");

        let fetched = svc.get_by_id(created.id).await.expect("get");

        assert_eq!(fetched.first_name, created.first_name);
        assert_eq!(fetched.last_name, created.last_name);
        assert_eq!(fetched.phone_number, created.phone_number);
        assert_eq!(fetched.identification_number, created.identification_number);
    }

    #[tokio::test]
    async fn get_by_id_fails_for_unassigned_id() {
        let store = Arc::new(TestStore::default());
        let result = service(store).get_by_id(CustomerId(999)).await;

        assert_eq!(result, Err(CustomerError::NotFound(CustomerId(999))));
    }

    #[tokio::test]
    async fn delete_by_id_removes_the_record() {
        let store = Arc::new(TestStore::default());
        let svc = service(store.clone());
        let created = svc.create(details("12345678901")).await.expect("create");

        svc.delete_by_id(created.id).await.expect("delete");

        assert_eq!(store.len().await, 0);
        assert_eq!(
            svc.get_by_id(created.id).await,
            Err(CustomerError::NotFound(created.id))
        );
    }

    #[tokio::test]
    async fn delete_by_id_fails_for_unknown_id_and_leaves_store_unchanged() {
        let store = Arc::new(TestStore::default());
        let svc = service(store.clone());
        svc.create(details("12345678901")).await.expect("create");

        let result = svc.delete_by_id(CustomerId(999)).await;

        assert_eq!(result, Err(CustomerError::NotFound(CustomerId(999))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn list_reflects_zero_one_and_three_customers() {
        let store = Arc::new(TestStore::default());
        let svc = service(store);

        assert!(svc.list().await.expect("empty list").is_empty());

        svc.create(details("12345678901")).await.expect("create 1");
        assert_eq!(svc.list().await.expect("one entry").len(), 1);

        svc.create(details("22345678901")).await.expect("create 2");
        svc.create(details("32345678901")).await.expect("create 3");

        let listed = svc.list().await.expect("three entries");
        assert_eq!(listed.len(), 3);
        let numbers: Vec<&str> =
            listed.iter().map(|entry| entry.identification_number.as_str()).collect();
        assert_eq!(numbers, vec!["12345678901", "22345678901", "32345678901"]);
    }
}
