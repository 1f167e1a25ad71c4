//! In-memory customers store.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::domain::{
    customers::{
        data::{CustomerPatch, CustomerUpdate, NewCustomer},
        errors::CustomersServiceError,
        records::{CustomerRecord, CustomerUuid},
        service::CustomersService,
    },
    seed::sample_customers,
};

#[derive(Debug, Default)]
pub struct InMemoryCustomersService {
    customers: RwLock<FxHashMap<CustomerUuid, CustomerRecord>>,
}

impl InMemoryCustomersService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with three sample customers.
    #[must_use]
    pub fn seeded() -> Self {
        let now = Timestamp::now();

        let customers = sample_customers()
            .into_iter()
            .map(|customer| {
                let record = customer.into_record(now);

                (record.uuid, record)
            })
            .collect();

        Self {
            customers: RwLock::new(customers),
        }
    }
}

fn revise(current: &mut CustomerRecord, mut next: CustomerRecord) -> CustomerRecord {
    next.version = current.version + 1;
    let floor = current
        .updated_at
        .checked_add(SignedDuration::from_nanos(1))
        .unwrap_or(current.updated_at);

    next.updated_at = Timestamp::now().max(floor);

    *current = next;

    current.clone()
}

#[async_trait]
impl CustomersService for InMemoryCustomersService {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut customers: Vec<CustomerRecord> =
            self.customers.read().await.values().cloned().collect();

        customers
            .sort_by_cached_key(|customer| (customer.name.to_lowercase(), customer.uuid));

        Ok(customers)
    }

    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        self.customers
            .read()
            .await
            .get(&customer)
            .cloned()
            .ok_or(CustomersServiceError::NotFound)
    }

    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let record = customer.into_record(Timestamp::now());

        self.customers
            .write()
            .await
            .insert(record.uuid, record.clone());

        Ok(record)
    }

    async fn update_customer(
        &self,
        customer: CustomerUuid,
        update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut customers = self.customers.write().await;

        let current = customers
            .get_mut(&customer)
            .ok_or(CustomersServiceError::NotFound)?;

        if update.is_stale(current.version) {
            return Err(CustomersServiceError::Conflict);
        }

        let mut next = current.clone();

        update.apply_to(&mut next);

        Ok(revise(current, next))
    }

    async fn patch_customer(
        &self,
        customer: CustomerUuid,
        patch: CustomerPatch,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut customers = self.customers.write().await;

        let current = customers
            .get_mut(&customer)
            .ok_or(CustomersServiceError::NotFound)?;

        let mut next = current.clone();

        patch.apply_to(&mut next);

        Ok(revise(current, next))
    }

    async fn delete_customer(&self, customer: CustomerUuid) -> Result<(), CustomersServiceError> {
        self.customers
            .write()
            .await
            .remove(&customer)
            .map(|_| ())
            .ok_or(CustomersServiceError::NotFound)
    }
}
