//! Link Beer Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{categories::errors::into_status_error, errors::ApiError, extensions::*, state::State};

/// Link Beer Category Handler
///
/// Tags a beer with a category. Repeating the call changes nothing.
#[endpoint(
    tags("categories"),
    summary = "Add Category To Beer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Beer tagged"),
        (status_code = StatusCode::NOT_FOUND, description = "Beer or category not found"),
    ),
)]
#[tracing::instrument(
    name = "categories.link",
    skip_all,
    fields(beer_uuid = tracing::field::Empty, category_uuid = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    category_id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let beer = id.into_inner();
    let category = category_id.into_inner();

    let span = tracing::Span::current();

    span.record("beer_uuid", tracing::field::display(beer));
    span.record("category_uuid", tracing::field::display(category));

    state
        .app
        .categories
        .add_beer_category(beer.into(), category.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use taproom_app::domain::{
        beers::records::BeerUuid,
        categories::{CategoriesServiceError, MockCategoriesService, records::CategoryUuid},
    };

    use crate::test_helpers::categories_service;

    use super::{super::tests::forbid_others, *};

    fn make_service(repo: MockCategoriesService) -> Service {
        categories_service(
            repo,
            Router::with_path("api/v1/beer/{id}/category/{category_id}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_link_returns_204() -> TestResult {
        let beer = BeerUuid::new();
        let category = CategoryUuid::new();
        let mut repo = MockCategoriesService::new();

        repo.expect_add_beer_category()
            .once()
            .withf(move |b, c| *b == beer && *c == category)
            .return_once(|_, _| Ok(()));

        forbid_others(&mut repo, "link");

        let res = TestClient::put(format!(
            "http://example.com/api/v1/beer/{beer}/category/{category}"
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_link_unknown_category_returns_404() -> TestResult {
        let beer = BeerUuid::new();
        let category = CategoryUuid::new();
        let mut repo = MockCategoriesService::new();

        repo.expect_add_beer_category()
            .once()
            .return_once(|_, _| Err(CategoriesServiceError::NotFound));

        forbid_others(&mut repo, "link");

        let res = TestClient::put(format!(
            "http://example.com/api/v1/beer/{beer}/category/{category}"
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
