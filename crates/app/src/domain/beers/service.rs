//! Beers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        beers::{
            data::{BeerFilter, BeerPatch, BeerUpdate, NewBeer},
            errors::BeersServiceError,
            records::{BeerRecord, BeerUuid},
            repository::PgBeersRepository,
        },
        paging::{Page, PageRequest},
    },
};

#[derive(Debug, Clone)]
pub struct PgBeersService {
    db: Db,
    repository: PgBeersRepository,
}

impl PgBeersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBeersRepository::new(),
        }
    }
}

#[async_trait]
impl BeersService for PgBeersService {
    async fn list_beers(
        &self,
        filter: BeerFilter,
        page: PageRequest,
    ) -> Result<Page<BeerRecord>, BeersServiceError> {
        let mut tx = self.db.begin().await?;

        let (beers, total) = match (filter.name_fragment(), filter.style) {
            (Some(name), Some(style)) => {
                self.repository
                    .find_all_by_name_like_and_style(&mut tx, name, style, page)
                    .await?
            }
            (Some(name), None) => {
                self.repository
                    .find_all_by_name_like(&mut tx, name, page)
                    .await?
            }
            (None, Some(style)) => {
                self.repository
                    .find_all_by_style(&mut tx, style, page)
                    .await?
            }
            (None, None) => self.repository.find_all(&mut tx, page).await?,
        };

        tx.commit().await?;

        let total = u64::try_from(total).unwrap_or_default();
        let beers = beers.into_iter().map(|beer| filter.present(beer)).collect();

        Ok(Page::new(beers, page, total))
    }

    async fn get_beer(&self, beer: BeerUuid) -> Result<BeerRecord, BeersServiceError> {
        let mut tx = self.db.begin().await?;

        let beer = self.repository.find_by_uuid(&mut tx, beer).await?;

        tx.commit().await?;

        Ok(beer)
    }

    async fn create_beer(&self, beer: NewBeer) -> Result<BeerRecord, BeersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .insert(&mut tx, BeerUuid::new(), &beer)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_beer(
        &self,
        beer: BeerUuid,
        update: BeerUpdate,
    ) -> Result<BeerRecord, BeersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut current = self.repository.find_by_uuid(&mut tx, beer).await?;

        if update.is_stale(current.version) {
            return Err(BeersServiceError::Conflict);
        }

        let expected_version = current.version;

        update.apply_to(&mut current);

        let updated = self
            .repository
            .update_if_version(&mut tx, &current, expected_version)
            .await?
            .ok_or(BeersServiceError::Conflict)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn patch_beer(
        &self,
        beer: BeerUuid,
        patch: BeerPatch,
    ) -> Result<BeerRecord, BeersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut current = self.repository.find_by_uuid(&mut tx, beer).await?;
        let expected_version = current.version;

        patch.apply_to(&mut current);

        let patched = self
            .repository
            .update_if_version(&mut tx, &current, expected_version)
            .await?
            .ok_or(BeersServiceError::Conflict)?;

        tx.commit().await?;

        Ok(patched)
    }

    async fn delete_beer(&self, beer: BeerUuid) -> Result<(), BeersServiceError> {
        let mut tx = self.db.begin().await?;

        if !self.repository.exists(&mut tx, beer).await? {
            return Err(BeersServiceError::NotFound);
        }

        self.repository.delete(&mut tx, beer).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BeersService: Send + Sync {
    /// Lists one page of beers, ordered by name, narrowed by `filter`.
    async fn list_beers(
        &self,
        filter: BeerFilter,
        page: PageRequest,
    ) -> Result<Page<BeerRecord>, BeersServiceError>;

    /// Retrieve a single beer.
    async fn get_beer(&self, beer: BeerUuid) -> Result<BeerRecord, BeersServiceError>;

    /// Stores a new beer, assigning its id, version and timestamps.
    async fn create_beer(&self, beer: NewBeer) -> Result<BeerRecord, BeersServiceError>;

    /// Replaces every mutable field of an existing beer.
    async fn update_beer(
        &self,
        beer: BeerUuid,
        update: BeerUpdate,
    ) -> Result<BeerRecord, BeersServiceError>;

    /// Overwrites only the fields carried by `patch`.
    async fn patch_beer(
        &self,
        beer: BeerUuid,
        patch: BeerPatch,
    ) -> Result<BeerRecord, BeersServiceError>;

    /// Deletes a beer with the given UUID.
    async fn delete_beer(&self, beer: BeerUuid) -> Result<(), BeersServiceError>;
}
