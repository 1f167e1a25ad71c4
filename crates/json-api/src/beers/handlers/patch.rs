//! Patch Beer Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use taproom_app::domain::beers::data::{BeerInput, BeerPatch};

use crate::{
    beers::{beer_location, errors::into_status_error, models::BeerRequest},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Beer Patch Handler
///
/// Overwrites only the fields present and non-blank in the body. The stored
/// version and update time move on even when nothing else changes.
#[endpoint(
    tags("beers"),
    summary = "Patch Beer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Beer patched"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status_code = StatusCode::NOT_FOUND, description = "Beer not found"),
    ),
)]
#[tracing::instrument(
    name = "beers.patch",
    skip_all,
    fields(beer_uuid = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<BeerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("beer_uuid", tracing::field::display(id));

    let patch = BeerPatch::try_from(BeerInput::from(json.into_inner()))?;

    state
        .app
        .beers
        .patch_beer(id.into(), patch)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, beer_location(id), true)
        .or_500("failed to set location header")?;

    Ok(StatusCode::NO_CONTENT)
}
