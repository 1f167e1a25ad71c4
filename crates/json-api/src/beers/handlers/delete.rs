//! Delete Beer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{beers::errors::into_status_error, errors::ApiError, extensions::*, state::State};

/// Delete Beer Handler
#[endpoint(
    tags("beers"),
    summary = "Delete Beer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Beer deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Beer not found"),
    ),
)]
#[tracing::instrument(
    name = "beers.delete",
    skip_all,
    fields(beer_uuid = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(id: PathParam<Uuid>, depot: &mut Depot) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("beer_uuid", tracing::field::display(id));

    state
        .app
        .beers
        .delete_beer(id.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
