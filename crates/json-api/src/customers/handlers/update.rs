//! Update Customer Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use taproom_app::domain::customers::data::{CustomerInput, CustomerUpdate};

use crate::{
    customers::{customer_location, errors::into_status_error, models::CustomerRequest},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Customer Update Handler
///
/// Replaces name and email. A `version` that no longer matches is a `409`.
#[endpoint(
    tags("customers"),
    summary = "Replace Customer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Customer updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::CONFLICT, description = "Stale version"),
    ),
)]
#[tracing::instrument(
    name = "customers.update",
    skip_all,
    fields(customer_uuid = tracing::field::Empty, version = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("customer_uuid", tracing::field::display(id));

    let update = CustomerUpdate::try_from(CustomerInput::from(json.into_inner()))?;

    let version = state
        .app
        .customers
        .update_customer(id.into(), update)
        .await
        .map_err(into_status_error)?
        .version;

    tracing::Span::current().record("version", version);

    res.add_header(LOCATION, customer_location(id), true)
        .or_500("failed to set location header")?;

    Ok(StatusCode::NO_CONTENT)
}
