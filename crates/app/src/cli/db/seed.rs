use clap::Args;
use taproom_app::{
    database::{self, Db},
    domain::{beers::PgBeersService, customers::PgCustomersService, seed::seed_if_empty},
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let db = Db::new(pool);

    let outcome = seed_if_empty(
        &PgBeersService::new(db.clone()),
        &PgCustomersService::new(db),
    )
    .await
    .map_err(|error| format!("failed to seed sample data: {error}"))?;

    println!("beers_created: {}", outcome.beers);
    println!("customers_created: {}", outcome.customers);

    Ok(())
}
