//! In-memory beers store.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::domain::{
    beers::{
        data::{BeerFilter, BeerPatch, BeerUpdate, NewBeer},
        errors::BeersServiceError,
        records::{BeerRecord, BeerUuid},
        service::BeersService,
    },
    paging::{Page, PageRequest},
    seed::sample_beers,
};

#[derive(Debug, Default)]
pub struct InMemoryBeersService {
    beers: RwLock<FxHashMap<BeerUuid, BeerRecord>>,
}

impl InMemoryBeersService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with three sample beers.
    #[must_use]
    pub fn seeded() -> Self {
        let now = Timestamp::now();

        let beers = sample_beers()
            .into_iter()
            .map(|beer| {
                let record = beer.into_record(now);

                (record.uuid, record)
            })
            .collect();

        Self {
            beers: RwLock::new(beers),
        }
    }
}

/// Persist `next` over `current`, bumping the version and timestamp.
fn revise(current: &mut BeerRecord, mut next: BeerRecord) -> BeerRecord {
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
impl BeersService for InMemoryBeersService {
    async fn list_beers(
        &self,
        filter: BeerFilter,
        page: PageRequest,
    ) -> Result<Page<BeerRecord>, BeersServiceError> {
        let mut matching: Vec<BeerRecord> = self
            .beers
            .read()
            .await
            .values()
            .filter(|beer| filter.matches(beer))
            .cloned()
            .collect();

        matching.sort_by_cached_key(|beer| (beer.name.to_lowercase(), beer.uuid));

        Ok(Page::from_ordered(matching, page).map(|beer| filter.present(beer)))
    }

    async fn get_beer(&self, beer: BeerUuid) -> Result<BeerRecord, BeersServiceError> {
        self.beers
            .read()
            .await
            .get(&beer)
            .cloned()
            .ok_or(BeersServiceError::NotFound)
    }

    async fn create_beer(&self, beer: NewBeer) -> Result<BeerRecord, BeersServiceError> {
        let record = beer.into_record(Timestamp::now());

        self.beers.write().await.insert(record.uuid, record.clone());

        Ok(record)
    }

    async fn update_beer(
        &self,
        beer: BeerUuid,
        update: BeerUpdate,
    ) -> Result<BeerRecord, BeersServiceError> {
        let mut beers = self.beers.write().await;

        let current = beers.get_mut(&beer).ok_or(BeersServiceError::NotFound)?;

        if update.is_stale(current.version) {
            return Err(BeersServiceError::Conflict);
        }

        let mut next = current.clone();

        update.apply_to(&mut next);

        Ok(revise(current, next))
    }

    async fn patch_beer(
        &self,
        beer: BeerUuid,
        patch: BeerPatch,
    ) -> Result<BeerRecord, BeersServiceError> {
        let mut beers = self.beers.write().await;

        let current = beers.get_mut(&beer).ok_or(BeersServiceError::NotFound)?;
        let mut next = current.clone();

        patch.apply_to(&mut next);

        Ok(revise(current, next))
    }

    async fn delete_beer(&self, beer: BeerUuid) -> Result<(), BeersServiceError> {
        self.beers
            .write()
            .await
            .remove(&beer)
            .map(|_| ())
            .ok_or(BeersServiceError::NotFound)
    }
}
