//! Delete Customer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{customers::errors::into_status_error, errors::ApiError, extensions::*, state::State};

/// Delete Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Delete Customer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Customer deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
    ),
)]
#[tracing::instrument(
    name = "customers.delete",
    skip_all,
    fields(customer_uuid = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(id: PathParam<Uuid>, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("customer_uuid", tracing::field::display(id));

    state
        .app
        .customers
        .delete_customer(id.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
