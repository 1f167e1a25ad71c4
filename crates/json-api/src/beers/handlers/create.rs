//! Create Beer Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taproom_app::domain::beers::data::{BeerInput, NewBeer};

use crate::{
    beers::{beer_location, errors::into_status_error, models::BeerRequest},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Beer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BeerCreatedResponse {
    /// Id assigned to the new beer
    pub id: Uuid,
}

/// Create Beer Handler
#[endpoint(
    tags("beers"),
    summary = "Create Beer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Beer created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
    ),
)]
#[tracing::instrument(name = "beers.create", skip_all, fields(beer_uuid = tracing::field::Empty), err(Debug))]
pub(crate) async fn handler(
    json: JsonBody<BeerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BeerCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let beer = NewBeer::try_from(BeerInput::from(json.into_inner()))?;

    let uuid = state
        .app
        .beers
        .create_beer(beer)
        .await
        .map_err(into_status_error)?
        .uuid;

    tracing::Span::current().record("beer_uuid", tracing::field::display(uuid));

    res.add_header(LOCATION, beer_location(uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(BeerCreatedResponse { id: uuid.into() }))
}
