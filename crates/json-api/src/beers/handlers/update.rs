//! Update Beer Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use taproom_app::domain::beers::data::{BeerInput, BeerUpdate};

use crate::{
    beers::{beer_location, errors::into_status_error, models::BeerRequest},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Beer Update Handler
///
/// Replaces every mutable field. A `version` that no longer matches the stored
/// beer is rejected with `409`.
#[endpoint(
    tags("beers"),
    summary = "Replace Beer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Beer updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status_code = StatusCode::NOT_FOUND, description = "Beer not found"),
        (status_code = StatusCode::CONFLICT, description = "Stale version"),
    ),
)]
#[tracing::instrument(
    name = "beers.update",
    skip_all,
    fields(beer_uuid = tracing::field::Empty, version = tracing::field::Empty),
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

    let update = BeerUpdate::try_from(BeerInput::from(json.into_inner()))?;

    let version = state
        .app
        .beers
        .update_beer(id.into(), update)
        .await
        .map_err(into_status_error)?
        .version;

    tracing::Span::current().record("version", version);

    res.add_header(LOCATION, beer_location(id), true)
        .or_500("failed to set location header")?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use taproom_app::domain::beers::{
        BeersServiceError, MockBeersService,
        records::{BeerRecord, BeerUuid},
    };

    use crate::test_helpers::{beers_service, make_beer, strict_beers_mock};

    use super::*;

    fn make_service(repo: MockBeersService) -> Service {
        beers_service(repo, Router::with_path("api/v1/beer/{id}").put(handler))
    }

    fn expect_only_update(
        repo: &mut MockBeersService,
        uuid: BeerUuid,
        result: Result<BeerRecord, BeersServiceError>,
    ) {
        repo.expect_update_beer()
            .once()
            .withf(move |u, update| {
                *u == uuid && update.version == Some(1) && update.name == "Renamed"
            })
            .return_once(move |_, _| result);

        repo.expect_list_beers().never();
        repo.expect_get_beer().never();
        repo.expect_create_beer().never();
        repo.expect_patch_beer().never();
        repo.expect_delete_beer().never();
    }

    fn body() -> serde_json::Value {
        json!({
            "version": 1,
            "beerName": "Renamed",
            "beerStyle": "IPA",
            "upc": "12356222",
            "price": 9.5,
        })
    }

    #[tokio::test]
    async fn test_update_returns_204_with_location() -> TestResult {
        let uuid = BeerUuid::new();
        let mut repo = MockBeersService::new();

        expect_only_update(&mut repo, uuid, Ok(make_beer(uuid)));

        let res = TestClient::put(format!("http://example.com/api/v1/beer/{uuid}"))
            .json(&body())
            .send(&make_service(repo))
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert_eq!(location, Some(format!("/api/v1/beer/{uuid}").as_str()));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_stale_version_returns_409() -> TestResult {
        let uuid = BeerUuid::new();
        let mut repo = MockBeersService::new();

        expect_only_update(&mut repo, uuid, Err(BeersServiceError::Conflict));

        let res = TestClient::put(format!("http://example.com/api/v1/beer/{uuid}"))
            .json(&body())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_beer_returns_404() -> TestResult {
        let uuid = BeerUuid::new();
        let mut repo = MockBeersService::new();

        expect_only_update(&mut repo, uuid, Err(BeersServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/api/v1/beer/{uuid}"))
            .json(&body())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_blank_name_returns_400() -> TestResult {
        let uuid = BeerUuid::new();
        let mut beer = body();

        beer["beerName"] = json!("  ");

        let res = TestClient::put(format!("http://example.com/api/v1/beer/{uuid}"))
            .json(&beer)
            .send(&make_service(strict_beers_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
