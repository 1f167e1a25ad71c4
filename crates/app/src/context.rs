//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    auth::AuthService,
    database::{self, Db},
    domain::{
        beers::{BeersService, InMemoryBeersService, PgBeersService},
        categories::{CategoriesService, InMemoryCategoriesService, PgCategoriesService},
        customers::{CustomersService, InMemoryCustomersService, PgCustomersService},
        seed::{SeedError, seed_if_empty},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] MigrateError),

    #[error("failed to load sample data")]
    Seed(#[from] SeedError),
}

/// What to do to a `PostgreSQL` database before serving from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartupOptions {
    pub run_migrations: bool,
    pub seed_data: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub beers: Arc<dyn BeersService>,
    pub customers: Arc<dyn CustomersService>,
    pub categories: Arc<dyn CategoriesService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, migrating or seeding fails.
    pub async fn from_database_url(
        url: &str,
        auth: Arc<dyn AuthService>,
        options: StartupOptions,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if options.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;

            info!("database migrations applied");
        }

        let db = Db::new(pool);

        let context = Self {
            beers: Arc::new(PgBeersService::new(db.clone())),
            customers: Arc::new(PgCustomersService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db)),
            auth,
        };

        if options.seed_data {
            seed_if_empty(context.beers.as_ref(), context.customers.as_ref()).await?;
        }

        Ok(context)
    }

    /// Build application context backed by in-process maps.
    #[must_use]
    pub fn in_memory(auth: Arc<dyn AuthService>, seed_data: bool) -> Self {
        let (beers, customers) = if seed_data {
            (
                InMemoryBeersService::seeded(),
                InMemoryCustomersService::seeded(),
            )
        } else {
            (InMemoryBeersService::new(), InMemoryCustomersService::new())
        };

        let beers: Arc<dyn BeersService> = Arc::new(beers);

        Self {
            categories: Arc::new(InMemoryCategoriesService::new(Arc::clone(&beers))),
            customers: Arc::new(customers),
            beers,
            auth,
        }
    }
}
