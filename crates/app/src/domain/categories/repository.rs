//! Categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    beers::records::BeerUuid,
    categories::{
        data::NewCategory,
        records::{CategoryRecord, CategoryUuid},
    },
};

const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const CREATE_CATEGORY_SQL: &str = include_str!("sql/create_category.sql");
const ADD_BEER_CATEGORY_SQL: &str = include_str!("sql/add_beer_category.sql");
const LIST_BEER_CATEGORIES_SQL: &str = include_str!("sql/list_beer_categories.sql");
const BEER_EXISTS_SQL: &str = include_str!("sql/beer_exists.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
        new: &NewCategory,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(CREATE_CATEGORY_SQL)
            .bind(category.into_uuid())
            .bind(&new.description)
            .fetch_one(&mut **tx)
            .await
    }

    /// Link a beer to a category; linking twice is a no-op.
    pub(crate) async fn link(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        beer: BeerUuid,
        category: CategoryUuid,
    ) -> Result<(), sqlx::Error> {
        query(ADD_BEER_CATEGORY_SQL)
            .bind(beer.into_uuid())
            .bind(category.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn find_by_beer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        beer: BeerUuid,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_BEER_CATEGORIES_SQL)
            .bind(beer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn beer_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        beer: BeerUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(BEER_EXISTS_SQL)
            .bind(beer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CategoryUuid::from_uuid(row.try_get("uuid")?),
            version: row.try_get("version")?,
            description: row.try_get("description")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
