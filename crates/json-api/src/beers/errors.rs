//! Beer Errors

use salvo::http::StatusError;
use tracing::error;

use taproom_app::domain::beers::BeersServiceError;

pub(crate) fn into_status_error(error: BeersServiceError) -> StatusError {
    match error {
        BeersServiceError::AlreadyExists => StatusError::conflict().brief("Beer already exists"),
        BeersServiceError::Conflict => {
            StatusError::conflict().brief("Beer was changed by another request")
        }
        BeersServiceError::InvalidData => StatusError::bad_request().brief("Invalid beer payload"),
        BeersServiceError::NotFound => StatusError::not_found().brief("Beer not found"),
        BeersServiceError::Sql(source) => {
            error!("beer storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
