//! Beers

mod errors;
pub(crate) mod handlers;
mod models;

pub(crate) use handlers::*;

/// Collection path; single beers live under `{BEERS_PATH}/{id}`.
pub(crate) const BEERS_PATH: &str = "/api/v1/beer";

pub(crate) fn beer_location(id: impl std::fmt::Display) -> String {
    format!("{BEERS_PATH}/{id}")
}
