//! Categories

mod errors;
pub(crate) mod handlers;
mod models;

pub(crate) use handlers::*;

pub(crate) const CATEGORIES_PATH: &str = "/api/v1/category";
