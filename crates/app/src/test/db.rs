//! Per-test `PostgreSQL` databases inside one shared container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

const USER: &str = "taproom_test";
const PASSWORD: &str = "taproom_test_password";

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

static DROP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("taproom_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn server_url(database: &str) -> String {
    let container = POSTGRES_CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

/// Drops databases in the background as their `TestDb`s go away.
async fn start_drop_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            let url = server_url("postgres").await;

            if let Ok(mut conn) = PgConnection::connect(&url).await {
                let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
                    .execute(&mut conn)
                    .await;
                let _ = conn.close().await;
            }
        }
    });

    sender
}

/// A freshly migrated database owned by a single test.
#[derive(Debug)]
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        DROP_SENDER.get_or_init(start_drop_task).await;

        // Only hex digits and underscores, so the name is always a safe identifier.
        let name = format!("taproom_test_{}", Uuid::now_v7().simple());

        let mut conn = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server_url(&name).await)
            .await
            .expect("Failed to create pool for database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn migrations_create_every_table() {
        let test_db = TestDb::new().await;

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'public' \
               AND table_name IN ('beers', 'customers', 'categories', 'beer_categories', 'beer_orders', 'beer_order_lines')",
        )
        .fetch_one(test_db.pool())
        .await
        .expect("Failed to count tables");

        assert_eq!(tables, 6);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn each_test_db_is_isolated() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        sqlx::query("CREATE TABLE only_here (id INTEGER)")
            .execute(first.pool())
            .await
            .expect("Failed to create table");

        let result = sqlx::query("SELECT COUNT(*) FROM only_here")
            .fetch_one(second.pool())
            .await;

        assert!(result.is_err());
    }
}
