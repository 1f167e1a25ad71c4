//! Customer Errors

use salvo::http::StatusError;
use tracing::error;

use taproom_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Customer already exists")
        }
        CustomersServiceError::Conflict => {
            StatusError::conflict().brief("Customer was changed by another request")
        }
        CustomersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid customer payload")
        }
        CustomersServiceError::NotFound => StatusError::not_found().brief("Customer not found"),
        CustomersServiceError::Sql(source) => {
            error!("customer storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
