//! In-memory categories store.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::RwLock;

use crate::domain::{
    beers::{BeersService, BeersServiceError, records::BeerUuid},
    categories::{
        data::NewCategory,
        errors::CategoriesServiceError,
        records::{CategoryRecord, CategoryUuid},
        service::CategoriesService,
    },
};

#[derive(Debug, Default)]
struct Categories {
    records: FxHashMap<CategoryUuid, CategoryRecord>,
    links: FxHashMap<BeerUuid, FxHashSet<CategoryUuid>>,
}

/// Categories kept in memory, checking beers against the sibling beer store.
pub struct InMemoryCategoriesService {
    beers: Arc<dyn BeersService>,
    categories: RwLock<Categories>,
}

impl InMemoryCategoriesService {
    #[must_use]
    pub fn new(beers: Arc<dyn BeersService>) -> Self {
        Self {
            beers,
            categories: RwLock::default(),
        }
    }

    async fn ensure_beer(&self, beer: BeerUuid) -> Result<(), CategoriesServiceError> {
        match self.beers.get_beer(beer).await {
            Ok(_) => Ok(()),
            Err(BeersServiceError::NotFound) => Err(CategoriesServiceError::NotFound),
            Err(error) => Err(CategoriesServiceError::BeerLookup(error)),
        }
    }
}

fn by_description(records: &mut [CategoryRecord]) {
    records.sort_by_cached_key(|category| {
        (category.description.to_lowercase(), category.uuid)
    });
}

#[async_trait]
impl CategoriesService for InMemoryCategoriesService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut categories: Vec<CategoryRecord> = self
            .categories
            .read()
            .await
            .records
            .values()
            .cloned()
            .collect();

        by_description(&mut categories);

        Ok(categories)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let record = category.into_record(Timestamp::now());

        self.categories
            .write()
            .await
            .records
            .insert(record.uuid, record.clone());

        Ok(record)
    }

    async fn add_beer_category(
        &self,
        beer: BeerUuid,
        category: CategoryUuid,
    ) -> Result<(), CategoriesServiceError> {
        self.ensure_beer(beer).await?;

        let mut categories = self.categories.write().await;

        if !categories.records.contains_key(&category) {
            return Err(CategoriesServiceError::NotFound);
        }

        categories.links.entry(beer).or_default().insert(category);

        Ok(())
    }

    async fn list_beer_categories(
        &self,
        beer: BeerUuid,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        self.ensure_beer(beer).await?;

        let categories = self.categories.read().await;

        let mut linked: Vec<CategoryRecord> = categories
            .links
            .get(&beer)
            .into_iter()
            .flatten()
            .filter_map(|uuid| categories.records.get(uuid).cloned())
            .collect();

        by_description(&mut linked);

        Ok(linked)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::beers::{
        InMemoryBeersService,
        data::NewBeer,
        records::BeerStyle,
    };

    use super::*;

    async fn service_with_beer() -> TestResult<(InMemoryCategoriesService, BeerUuid)> {
        let beers = Arc::new(InMemoryBeersService::new());

        let beer = beers
            .create_beer(NewBeer {
                name: "Galaxy Cat".to_string(),
                style: BeerStyle::PaleAle,
                upc: "12356".to_string(),
                quantity_on_hand: None,
                price: Decimal::new(1299, 2),
            })
            .await?;

        Ok((InMemoryCategoriesService::new(beers), beer.uuid))
    }

    #[tokio::test]
    async fn linking_is_idempotent() -> TestResult {
        let (service, beer) = service_with_beer().await?;

        let category = service
            .create_category(NewCategory {
                description: "Hoppy".to_string(),
            })
            .await?;

        service.add_beer_category(beer, category.uuid).await?;
        service.add_beer_category(beer, category.uuid).await?;

        let linked = service.list_beer_categories(beer).await?;

        assert_eq!(linked, vec![category]);

        Ok(())
    }

    #[tokio::test]
    async fn categories_are_listed_by_description() -> TestResult {
        let (service, _) = service_with_beer().await?;

        for description in ["sour", "Dark", "hoppy"] {
            service
                .create_category(NewCategory {
                    description: description.to_string(),
                })
                .await?;
        }

        let categories = service.list_categories().await?;

        let descriptions: Vec<&str> = categories
            .iter()
            .map(|c| c.description.as_str())
            .collect();

        assert_eq!(descriptions, ["Dark", "hoppy", "sour"]);

        Ok(())
    }

    #[tokio::test]
    async fn linking_unknown_beer_returns_not_found() -> TestResult {
        let (service, _) = service_with_beer().await?;

        let category = service
            .create_category(NewCategory {
                description: "Hoppy".to_string(),
            })
            .await?;

        let result = service
            .add_beer_category(BeerUuid::new(), category.uuid)
            .await;

        assert!(matches!(result, Err(CategoriesServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn linking_unknown_category_returns_not_found() -> TestResult {
        let (service, beer) = service_with_beer().await?;

        let result = service.add_beer_category(beer, CategoryUuid::new()).await;

        assert!(matches!(result, Err(CategoriesServiceError::NotFound)));

        Ok(())
    }
}
