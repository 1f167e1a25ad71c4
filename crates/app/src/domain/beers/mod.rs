//! Beers

pub mod data;
pub mod errors;
mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::BeersServiceError;
pub use memory::InMemoryBeersService;
pub use service::*;
