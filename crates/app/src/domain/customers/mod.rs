//! Customers

pub mod data;
pub mod errors;
mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::CustomersServiceError;
pub use memory::InMemoryCustomersService;
pub use service::*;
