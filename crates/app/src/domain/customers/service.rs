//! Customers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::customers::{
        data::{CustomerPatch, CustomerUpdate, NewCustomer},
        errors::CustomersServiceError,
        records::{CustomerRecord, CustomerUuid},
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customers = self.repository.find_all(&mut tx).await?;

        tx.commit().await?;

        Ok(customers)
    }

    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customer = self.repository.find_by_uuid(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }

    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .insert(&mut tx, CustomerUuid::new(), &customer)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_customer(
        &self,
        customer: CustomerUuid,
        update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut current = self.repository.find_by_uuid(&mut tx, customer).await?;

        if update.is_stale(current.version) {
            return Err(CustomersServiceError::Conflict);
        }

        let expected_version = current.version;

        update.apply_to(&mut current);

        let updated = self
            .repository
            .update_if_version(&mut tx, &current, expected_version)
            .await?
            .ok_or(CustomersServiceError::Conflict)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn patch_customer(
        &self,
        customer: CustomerUuid,
        patch: CustomerPatch,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut current = self.repository.find_by_uuid(&mut tx, customer).await?;
        let expected_version = current.version;

        patch.apply_to(&mut current);

        let patched = self
            .repository
            .update_if_version(&mut tx, &current, expected_version)
            .await?
            .ok_or(CustomersServiceError::Conflict)?;

        tx.commit().await?;

        Ok(patched)
    }

    async fn delete_customer(&self, customer: CustomerUuid) -> Result<(), CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        if !self.repository.exists(&mut tx, customer).await? {
            return Err(CustomersServiceError::NotFound);
        }

        self.repository.delete(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves all customers ordered by name.
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Creates a new customer.
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Replaces the name and email of a customer.
    async fn update_customer(
        &self,
        customer: CustomerUuid,
        update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Overwrites only the non-blank fields carried by `patch`.
    async fn patch_customer(
        &self,
        customer: CustomerUuid,
        patch: CustomerPatch,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Deletes a customer with the given UUID.
    async fn delete_customer(&self, customer: CustomerUuid) -> Result<(), CustomersServiceError>;
}
