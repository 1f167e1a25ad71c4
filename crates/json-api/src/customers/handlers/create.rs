//! Create Customer Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use taproom_app::domain::customers::data::{CustomerInput, NewCustomer};

use crate::{
    customers::{
        customer_location,
        errors::into_status_error,
        models::{CustomerCreatedResponse, CustomerRequest},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
    ),
)]
#[tracing::instrument(
    name = "customers.create",
    skip_all,
    fields(customer_uuid = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = NewCustomer::try_from(CustomerInput::from(json.into_inner()))?;

    let uuid = state
        .app
        .customers
        .create_customer(customer)
        .await
        .map_err(into_status_error)?
        .uuid;

    tracing::Span::current().record("customer_uuid", tracing::field::display(uuid));

    res.add_header(LOCATION, customer_location(uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CustomerCreatedResponse { id: uuid.into() }))
}
