//! Customers

mod errors;
pub(crate) mod handlers;
mod models;

pub(crate) use handlers::*;

pub(crate) const CUSTOMERS_PATH: &str = "/api/v1/customer";

pub(crate) fn customer_location(id: impl std::fmt::Display) -> String {
    format!("{CUSTOMERS_PATH}/{id}")
}
