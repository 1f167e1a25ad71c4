//! Customer Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Customer Index Handler
///
/// Returns every customer ordered by name.
#[endpoint(
    tags("customers"),
    summary = "List Customers",
    security(("basic_auth" = []), ("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customers = state
        .app
        .customers
        .list_customers()
        .await
        .map_err(into_status_error)?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}
