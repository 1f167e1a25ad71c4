//! Create Category Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use taproom_app::domain::categories::data::{CategoryInput, NewCategory};

use crate::{
    categories::{
        CATEGORIES_PATH,
        errors::into_status_error,
        models::{CategoryCreatedResponse, CategoryRequest},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status_code = StatusCode::CONFLICT, description = "Description already used"),
    ),
)]
#[tracing::instrument(
    name = "categories.create",
    skip_all,
    fields(category_uuid = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    json: JsonBody<CategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let category = NewCategory::try_from(CategoryInput::from(json.into_inner()))?;

    let uuid = state
        .app
        .categories
        .create_category(category)
        .await
        .map_err(into_status_error)?
        .uuid;

    tracing::Span::current().record("category_uuid", tracing::field::display(uuid));

    res.add_header(LOCATION, format!("{CATEGORIES_PATH}/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CategoryCreatedResponse { id: uuid.into() }))
}
