//! Categories

pub mod data;
pub mod errors;
mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::CategoriesServiceError;
pub use memory::InMemoryCategoriesService;
pub use service::*;
