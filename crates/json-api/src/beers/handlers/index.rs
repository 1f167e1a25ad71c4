//! Beer Index Handler

use std::{str::FromStr, sync::Arc};

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use taproom_app::domain::{
    beers::{data::BeerFilter, records::BeerStyle},
    paging::{Page, PageRequest},
};

use crate::{
    beers::{errors::into_status_error, get::BeerResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// One page of beers ordered by name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BeerPageResponse {
    pub content: Vec<BeerResponse>,

    /// 1-based number of this page
    pub page_number: u32,

    pub page_size: u32,

    /// Matching beers across all pages
    pub total_elements: u64,

    pub total_pages: u64,
}

impl From<Page<BeerResponse>> for BeerPageResponse {
    fn from(page: Page<BeerResponse>) -> Self {
        let total_pages = page.total_pages();

        BeerPageResponse {
            content: page.content,
            page_number: page.page_number,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages,
        }
    }
}

fn query_value<T: FromStr>(req: &Request, key: &str) -> Result<Option<T>, StatusError> {
    req.query::<String>(key)
        .map(|raw| raw.trim().parse::<T>())
        .transpose()
        .map_err(|_ignored| {
            StatusError::bad_request().brief(format!("could not parse \"{key}\" query parameter"))
        })
}

/// Read filters and paging from the query string.
fn parse_query(req: &Request) -> Result<(BeerFilter, PageRequest), StatusError> {
    let filter = BeerFilter {
        name: req.query::<String>("beerName"),
        style: query_value::<BeerStyle>(req, "beerStyle")?,
        show_inventory: query_value::<bool>(req, "showInventory")?,
    };

    let page = PageRequest::new(
        query_value::<i64>(req, "pageNumber")?,
        query_value::<i64>(req, "pageSize")?,
    );

    Ok((filter, page))
}

/// Beer Index Handler
///
/// Lists beers, optionally filtered by a case-insensitive name fragment and a
/// style. `showInventory=false` blanks every `quantityOnHand`.
#[endpoint(
    tags("beers"),
    summary = "List Beers",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    parameters(
        ("beerName" = Option<String>, Query, description = "Case-insensitive name fragment"),
        ("beerStyle" = Option<String>, Query, description = "Exact style, e.g. IPA"),
        ("showInventory" = Option<bool>, Query, description = "false hides quantityOnHand"),
        ("pageNumber" = Option<i64>, Query, description = "1-based page, defaults to 1"),
        ("pageSize" = Option<i64>, Query, description = "Defaults to 25, capped at 1000"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<BeerPageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let (filter, page) = parse_query(req)?;

    let beers = state
        .app
        .beers
        .list_beers(filter, page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(beers.map(BeerResponse::from).into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use taproom_app::domain::{
        beers::{BeersServiceError, MockBeersService, records::BeerUuid},
        paging::MAX_PAGE_SIZE,
    };

    use crate::test_helpers::{beers_service, make_beer, strict_beers_mock};

    use super::*;

    fn make_service(repo: MockBeersService) -> Service {
        beers_service(repo, Router::with_path("api/v1/beer").get(handler))
    }

    fn expect_only_list<F>(repo: &mut MockBeersService, matcher: F, total: u64)
    where
        F: Fn(&BeerFilter, &PageRequest) -> bool + Send + 'static,
    {
        repo.expect_list_beers()
            .once()
            .withf(matcher)
            .return_once(move |_, page| {
                Ok(Page::new(vec![make_beer(BeerUuid::new())], page, total))
            });

        repo.expect_get_beer().never();
        repo.expect_create_beer().never();
        repo.expect_update_beer().never();
        repo.expect_patch_beer().never();
        repo.expect_delete_beer().never();
    }

    #[tokio::test]
    async fn test_index_defaults_to_first_page() -> TestResult {
        let mut repo = MockBeersService::new();

        expect_only_list(
            &mut repo,
            |filter, page| *filter == BeerFilter::default() && *page == PageRequest::first(),
            1,
        );

        let mut res = TestClient::get("http://example.com/api/v1/beer")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: BeerPageResponse = res.take_json().await?;

        assert_eq!(body.content.len(), 1);
        assert_eq!(body.page_number, 1);
        assert_eq!(body.page_size, 25);
        assert_eq!(body.total_elements, 1);
        assert_eq!(body.total_pages, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_filters_and_paging() -> TestResult {
        let mut repo = MockBeersService::new();

        expect_only_list(
            &mut repo,
            |filter, page| {
                filter.name.as_deref() == Some("IPA")
                    && filter.style == Some(BeerStyle::Ipa)
                    && filter.show_inventory == Some(false)
                    && page.page_number() == 2
                    && page.page_size() == 50
            },
            120,
        );

        let mut res = TestClient::get(
            "http://example.com/api/v1/beer?beerName=IPA&beerStyle=IPA&showInventory=false&pageNumber=2&pageSize=50",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: BeerPageResponse = res.take_json().await?;

        assert_eq!(body.total_pages, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_clamps_oversized_page() -> TestResult {
        let mut repo = MockBeersService::new();

        expect_only_list(
            &mut repo,
            |_, page| page.page_size() == MAX_PAGE_SIZE,
            2413,
        );

        let res = TestClient::get("http://example.com/api/v1/beer?pageSize=2413")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_style_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/api/v1/beer?beerStyle=CIDER")
            .send(&make_service(strict_beers_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_non_numeric_page_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/api/v1/beer?pageNumber=two")
            .send(&make_service(strict_beers_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_500() -> TestResult {
        let mut repo = MockBeersService::new();

        repo.expect_list_beers()
            .once()
            .return_once(|_, _| Err(BeersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        repo.expect_get_beer().never();
        repo.expect_create_beer().never();
        repo.expect_update_beer().never();
        repo.expect_patch_beer().never();
        repo.expect_delete_beer().never();

        let res = TestClient::get("http://example.com/api/v1/beer")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
