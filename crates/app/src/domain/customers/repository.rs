//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::customers::{
    data::NewCustomer,
    records::{CustomerRecord, CustomerUuid},
};

const FIND_CUSTOMER_SQL: &str = include_str!("sql/find_customer.sql");
const LIST_CUSTOMERS_SQL: &str = include_str!("sql/list_customers.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("sql/create_customer.sql");
const UPDATE_CUSTOMER_SQL: &str = include_str!("sql/update_customer.sql");
const CUSTOMER_EXISTS_SQL: &str = include_str!("sql/customer_exists.sql");
const DELETE_CUSTOMER_SQL: &str = include_str!("sql/delete_customer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_uuid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(FIND_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LIST_CUSTOMERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        new: &NewCustomer,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(CREATE_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .bind(&new.name)
            .bind(new.email.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    /// Returns `None` when the stored version no longer equals `expected_version`.
    pub(crate) async fn update_if_version(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: &CustomerRecord,
        expected_version: i32,
    ) -> Result<Option<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(UPDATE_CUSTOMER_SQL)
            .bind(customer.uuid.into_uuid())
            .bind(expected_version)
            .bind(&customer.name)
            .bind(customer.email.as_deref())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(CUSTOMER_EXISTS_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CustomerUuid::from_uuid(row.try_get("uuid")?),
            version: row.try_get("version")?,
            name: row.try_get("customer_name")?,
            email: row.try_get("email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
