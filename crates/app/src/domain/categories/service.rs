//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        beers::records::BeerUuid,
        categories::{
            data::NewCategory,
            errors::CategoriesServiceError,
            records::{CategoryRecord, CategoryUuid},
            repository::PgCategoriesRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.find_all(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .insert(&mut tx, CategoryUuid::new(), &category)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn add_beer_category(
        &self,
        beer: BeerUuid,
        category: CategoryUuid,
    ) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.link(&mut tx, beer, category).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn list_beer_categories(
        &self,
        beer: BeerUuid,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        if !self.repository.beer_exists(&mut tx, beer).await? {
            return Err(CategoriesServiceError::NotFound);
        }

        let categories = self.repository.find_by_beer(&mut tx, beer).await?;

        tx.commit().await?;

        Ok(categories)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories ordered by description.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Creates a new category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Tags `beer` with `category`. Tagging twice has no further effect.
    async fn add_beer_category(
        &self,
        beer: BeerUuid,
        category: CategoryUuid,
    ) -> Result<(), CategoriesServiceError>;

    /// Lists the categories a beer is tagged with.
    async fn list_beer_categories(
        &self,
        beer: BeerUuid,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::beers::{BeersService, data::NewBeer, records::BeerStyle},
        test::TestContext,
    };

    use super::*;

    async fn create_beer(ctx: &TestContext) -> TestResult<BeerUuid> {
        let beer = ctx
            .beers
            .create_beer(NewBeer {
                name: "Crank".to_string(),
                style: BeerStyle::PaleAle,
                upc: "12356222".to_string(),
                quantity_on_hand: Some(392),
                price: Decimal::new(1199, 2),
            })
            .await?;

        Ok(beer.uuid)
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn linked_category_is_listed_for_beer() -> TestResult {
        let ctx = TestContext::new().await;
        let beer = create_beer(&ctx).await?;

        let category = ctx
            .categories
            .create_category(NewCategory {
                description: "Hoppy".to_string(),
            })
            .await?;

        ctx.categories
            .add_beer_category(beer, category.uuid)
            .await?;
        ctx.categories
            .add_beer_category(beer, category.uuid)
            .await?;

        let categories = ctx.categories.list_beer_categories(beer).await?;

        assert_eq!(categories, vec![category]);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn linking_unknown_category_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let beer = create_beer(&ctx).await?;

        let result = ctx
            .categories
            .add_beer_category(beer, CategoryUuid::new())
            .await;

        assert!(
            matches!(result, Err(CategoriesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn deleting_beer_removes_its_links() -> TestResult {
        let ctx = TestContext::new().await;
        let beer = create_beer(&ctx).await?;

        let category = ctx
            .categories
            .create_category(NewCategory {
                description: "Hoppy".to_string(),
            })
            .await?;

        ctx.categories
            .add_beer_category(beer, category.uuid)
            .await?;

        ctx.beers.delete_beer(beer).await?;

        let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM beer_categories")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(links, 0);
        assert_eq!(ctx.categories.list_categories().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn categories_of_unknown_beer_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.categories.list_beer_categories(BeerUuid::new()).await;

        assert!(matches!(result, Err(CategoriesServiceError::NotFound)));
    }
}
