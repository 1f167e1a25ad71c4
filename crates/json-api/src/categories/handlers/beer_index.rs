//! Beer Categories Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Beer Categories Handler
///
/// Lists the categories a beer is tagged with.
#[endpoint(
    tags("categories"),
    summary = "List Beer Categories",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Categories of the beer"),
        (status_code = StatusCode::NOT_FOUND, description = "Beer not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_beer_categories(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
