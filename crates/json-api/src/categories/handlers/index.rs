//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    categories::{errors::into_status_error, models::CategoryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Category Index Handler
#[endpoint(
    tags("categories"),
    summary = "List Categories",
    security(("basic_auth" = []), ("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use taproom_app::domain::categories::{MockCategoriesService, records::CategoryUuid};

    use crate::test_helpers::{categories_service, make_category};

    use super::{super::tests::forbid_others, *};

    #[tokio::test]
    async fn test_index_lists_categories() -> TestResult {
        let uuid = CategoryUuid::new();
        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories()
            .once()
            .return_once(move || Ok(vec![make_category(uuid)]));

        forbid_others(&mut repo, "list");

        let mut res = TestClient::get("http://example.com/api/v1/category")
            .send(&categories_service(
                repo,
                Router::with_path("api/v1/category").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<CategoryResponse> = res.take_json().await?;

        assert_eq!(body.len(), 1);
        assert_eq!(body[0].id, uuid.into_uuid());
        assert_eq!(body[0].description, "Hoppy");

        Ok(())
    }
}
