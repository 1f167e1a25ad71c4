//! Category Handlers

pub(crate) mod beer_index;
pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod link;
