//! Taproom Domain Concerns

pub mod beers;
pub mod categories;
pub mod customers;
pub mod paging;
pub mod seed;
pub mod validation;
