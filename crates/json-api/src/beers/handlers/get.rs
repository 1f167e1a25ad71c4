//! Get Beer Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taproom_app::domain::beers::records::BeerRecord;

use crate::{
    beers::{errors::into_status_error, models::BeerStyleDto},
    errors::ApiError,
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BeerResponse {
    /// The unique identifier of the beer
    pub id: Uuid,

    /// Bumped on every successful change
    pub version: i32,

    pub beer_name: String,

    pub beer_style: BeerStyleDto,

    pub upc: String,

    /// Absent when inventory is hidden
    pub quantity_on_hand: Option<i32>,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// When the beer was first stored
    pub created_date: String,

    /// When the beer was last changed
    pub update_date: String,
}

impl From<BeerRecord> for BeerResponse {
    fn from(beer: BeerRecord) -> Self {
        BeerResponse {
            id: beer.uuid.into(),
            version: beer.version,
            beer_name: beer.name,
            beer_style: beer.style.into(),
            upc: beer.upc,
            quantity_on_hand: beer.quantity_on_hand,
            price: beer.price,
            created_date: beer.created_at.to_string(),
            update_date: beer.updated_at.to_string(),
        }
    }
}

/// Get Beer Handler
#[endpoint(
    tags("beers"),
    summary = "Get Beer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Beer found"),
        (status_code = StatusCode::NOT_FOUND, description = "Beer not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BeerResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let beer = state
        .app
        .beers
        .get_beer(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(beer.into()))
}
