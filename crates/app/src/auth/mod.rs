//! Authentication

mod credentials;
mod errors;
mod models;
mod secret;
mod service;
mod token;

pub use credentials::*;
pub use errors::*;
pub use models::*;
pub use secret::Secret;
pub use service::*;
pub use token::*;
