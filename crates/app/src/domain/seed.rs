//! Sample data for fresh stores.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::domain::{
    beers::{
        BeersService, BeersServiceError,
        data::{BeerFilter, NewBeer},
        records::BeerStyle,
    },
    customers::{CustomersService, CustomersServiceError, data::NewCustomer},
    paging::PageRequest,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to seed beers")]
    Beers(#[from] BeersServiceError),

    #[error("failed to seed customers")]
    Customers(#[from] CustomersServiceError),
}

/// How many records [`seed_if_empty`] created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub beers: usize,
    pub customers: usize,
}

/// Load the sample beers and customers into stores that have none.
///
/// Each resource is checked on its own; a store that already holds rows is
/// left alone.
///
/// # Errors
///
/// Returns an error when a store cannot be read or written.
pub async fn seed_if_empty(
    beers: &dyn BeersService,
    customers: &dyn CustomersService,
) -> Result<SeedOutcome, SeedError> {
    let mut outcome = SeedOutcome::default();

    let existing = beers
        .list_beers(BeerFilter::default(), PageRequest::new(Some(1), Some(1)))
        .await?;

    if existing.total_elements == 0 {
        for beer in sample_beers() {
            beers.create_beer(beer).await?;
            outcome.beers += 1;
        }
    }

    if customers.list_customers().await?.is_empty() {
        for customer in sample_customers() {
            customers.create_customer(customer).await?;
            outcome.customers += 1;
        }
    }

    info!(
        beers = outcome.beers,
        customers = outcome.customers,
        "seeded sample data"
    );

    Ok(outcome)
}

/// Three sample beers.
#[must_use]
pub fn sample_beers() -> [NewBeer; 3] {
    [
        NewBeer {
            name: "Galaxy Cat".to_string(),
            style: BeerStyle::PaleAle,
            upc: "12356".to_string(),
            quantity_on_hand: Some(122),
            price: Decimal::new(1299, 2),
        },
        NewBeer {
            name: "Crank".to_string(),
            style: BeerStyle::PaleAle,
            upc: "12356222".to_string(),
            quantity_on_hand: Some(392),
            price: Decimal::new(1199, 2),
        },
        NewBeer {
            name: "Sunshine City".to_string(),
            style: BeerStyle::Ipa,
            upc: "12356".to_string(),
            quantity_on_hand: Some(144),
            price: Decimal::new(1399, 2),
        },
    ]
}

/// Three sample customers.
#[must_use]
pub fn sample_customers() -> [NewCustomer; 3] {
    [1, 2, 3].map(|n| NewCustomer {
        name: format!("Customer {n}"),
        email: Some(format!("customer{n}@example.com")),
    })
}
