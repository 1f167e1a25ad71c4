//! Beers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    beers::{
        data::NewBeer,
        records::{BeerRecord, BeerStyle, BeerUuid},
    },
    paging::PageRequest,
};

const FIND_BEER_SQL: &str = include_str!("sql/find_beer.sql");
const LIST_BEERS_SQL: &str = include_str!("sql/list_beers.sql");
const LIST_BEERS_BY_NAME_SQL: &str = include_str!("sql/list_beers_by_name.sql");
const LIST_BEERS_BY_STYLE_SQL: &str = include_str!("sql/list_beers_by_style.sql");
const LIST_BEERS_BY_NAME_AND_STYLE_SQL: &str = include_str!("sql/list_beers_by_name_and_style.sql");
const COUNT_BEERS_SQL: &str = include_str!("sql/count_beers.sql");
const COUNT_BEERS_BY_NAME_SQL: &str = include_str!("sql/count_beers_by_name.sql");
const COUNT_BEERS_BY_STYLE_SQL: &str = include_str!("sql/count_beers_by_style.sql");
const COUNT_BEERS_BY_NAME_AND_STYLE_SQL: &str =
    include_str!("sql/count_beers_by_name_and_style.sql");
const CREATE_BEER_SQL: &str = include_str!("sql/create_beer.sql");
const UPDATE_BEER_SQL: &str = include_str!("sql/update_beer.sql");
const BEER_EXISTS_SQL: &str = include_str!("sql/beer_exists.sql");
const DELETE_BEER_SQL: &str = include_str!("sql/delete_beer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBeersRepository;

impl PgBeersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_uuid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        beer: BeerUuid,
    ) -> Result<BeerRecord, sqlx::Error> {
        query_as::<Postgres, BeerRecord>(FIND_BEER_SQL)
            .bind(beer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: PageRequest,
    ) -> Result<(Vec<BeerRecord>, i64), sqlx::Error> {
        let beers = query_as::<Postgres, BeerRecord>(LIST_BEERS_SQL)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await?;

        let total = query_scalar::<Postgres, i64>(COUNT_BEERS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        Ok((beers, total))
    }

    pub(crate) async fn find_all_by_name_like(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        page: PageRequest,
    ) -> Result<(Vec<BeerRecord>, i64), sqlx::Error> {
        let pattern = like_pattern(name);

        let beers = query_as::<Postgres, BeerRecord>(LIST_BEERS_BY_NAME_SQL)
            .bind(&pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await?;

        let total = query_scalar::<Postgres, i64>(COUNT_BEERS_BY_NAME_SQL)
            .bind(&pattern)
            .fetch_one(&mut **tx)
            .await?;

        Ok((beers, total))
    }

    pub(crate) async fn find_all_by_style(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        style: BeerStyle,
        page: PageRequest,
    ) -> Result<(Vec<BeerRecord>, i64), sqlx::Error> {
        let beers = query_as::<Postgres, BeerRecord>(LIST_BEERS_BY_STYLE_SQL)
            .bind(style.as_i16())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await?;

        let total = query_scalar::<Postgres, i64>(COUNT_BEERS_BY_STYLE_SQL)
            .bind(style.as_i16())
            .fetch_one(&mut **tx)
            .await?;

        Ok((beers, total))
    }

    pub(crate) async fn find_all_by_name_like_and_style(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        style: BeerStyle,
        page: PageRequest,
    ) -> Result<(Vec<BeerRecord>, i64), sqlx::Error> {
        let pattern = like_pattern(name);

        let beers = query_as::<Postgres, BeerRecord>(LIST_BEERS_BY_NAME_AND_STYLE_SQL)
            .bind(&pattern)
            .bind(style.as_i16())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await?;

        let total = query_scalar::<Postgres, i64>(COUNT_BEERS_BY_NAME_AND_STYLE_SQL)
            .bind(&pattern)
            .bind(style.as_i16())
            .fetch_one(&mut **tx)
            .await?;

        Ok((beers, total))
    }

    pub(crate) async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        beer: BeerUuid,
        new: &NewBeer,
    ) -> Result<BeerRecord, sqlx::Error> {
        query_as::<Postgres, BeerRecord>(CREATE_BEER_SQL)
            .bind(beer.into_uuid())
            .bind(&new.name)
            .bind(new.style.as_i16())
            .bind(&new.upc)
            .bind(new.quantity_on_hand)
            .bind(new.price)
            .fetch_one(&mut **tx)
            .await
    }

    /// Write `beer` only if the stored version still equals `expected_version`.
    ///
    /// Returns `None` when another writer got there first.
    pub(crate) async fn update_if_version(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        beer: &BeerRecord,
        expected_version: i32,
    ) -> Result<Option<BeerRecord>, sqlx::Error> {
        query_as::<Postgres, BeerRecord>(UPDATE_BEER_SQL)
            .bind(beer.uuid.into_uuid())
            .bind(expected_version)
            .bind(&beer.name)
            .bind(beer.style.as_i16())
            .bind(&beer.upc)
            .bind(beer.quantity_on_hand)
            .bind(beer.price)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        beer: BeerUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(BEER_EXISTS_SQL)
            .bind(beer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        beer: BeerUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BEER_SQL)
            .bind(beer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// `ILIKE` pattern matching `fragment` anywhere, with wildcards escaped.
fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);

    pattern.push('%');

    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}

impl<'r> FromRow<'r, PgRow> for BeerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let style_code: i16 = row.try_get("beer_style")?;

        let style = BeerStyle::try_from(style_code).map_err(|e| sqlx::Error::ColumnDecode {
            index: "beer_style".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: BeerUuid::from_uuid(row.try_get("uuid")?),
            version: row.try_get("version")?,
            name: row.try_get("beer_name")?,
            style,
            upc: row.try_get("upc")?,
            quantity_on_hand: row.try_get("quantity_on_hand")?,
            price: row.try_get("price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
