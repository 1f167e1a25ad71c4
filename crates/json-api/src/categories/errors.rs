//! Category Errors

use salvo::http::StatusError;
use tracing::error;

use taproom_app::domain::categories::CategoriesServiceError;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Category already exists")
        }
        CategoriesServiceError::NotFound => {
            StatusError::not_found().brief("Beer or category not found")
        }
        CategoriesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid category payload")
        }
        CategoriesServiceError::Sql(source) => {
            error!("category storage failure: {source}");

            StatusError::internal_server_error()
        }
        CategoriesServiceError::BeerLookup(source) => {
            error!("beer lookup for category failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
