//! Storage Config

use clap::{ArgAction, Args, ValueEnum};

/// Where beers, customers and categories live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// `PostgreSQL` via `DATABASE_URL`.
    Postgres,

    /// Process-local maps, lost on restart.
    Memory,
}

/// Storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage backend (postgres, memory)
    #[arg(long = "storage", env = "STORAGE", value_enum, default_value_t = StorageBackend::Postgres)]
    pub backend: StorageBackend,

    /// `PostgreSQL` connection string, required for the postgres backend
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Apply pending migrations at startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = true, action = ArgAction::Set)]
    pub run_migrations: bool,

    /// Load sample beers and customers when the store is empty
    #[arg(long, env = "SEED_DATA", default_value_t = false, action = ArgAction::Set)]
    pub seed_data: bool,
}
