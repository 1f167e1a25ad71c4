//! Get Customer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Customer Handler
#[endpoint(
    tags("customers"),
    summary = "Get Customer",
    security(("basic_auth" = []), ("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer found"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = state
        .app
        .customers
        .get_customer(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use taproom_app::domain::customers::{
        CustomersServiceError, MockCustomersService, records::CustomerUuid,
    };

    use crate::test_helpers::{customers_service, make_customer};

    use super::{super::tests::forbid_others, *};

    fn make_service(repo: MockCustomersService) -> Service {
        customers_service(repo, Router::with_path("api/v1/customer/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_customer() -> TestResult {
        let uuid = CustomerUuid::new();
        let mut repo = MockCustomersService::new();

        repo.expect_get_customer()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_customer(uuid)));

        forbid_others(&mut repo, "get");

        let mut res = TestClient::get(format!("http://example.com/api/v1/customer/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CustomerResponse = res.take_json().await?;

        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.email.as_deref(), Some("customer1@example.com"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_customer_returns_404() -> TestResult {
        let uuid = CustomerUuid::new();
        let mut repo = MockCustomersService::new();

        repo.expect_get_customer()
            .once()
            .return_once(|_| Err(CustomersServiceError::NotFound));

        forbid_others(&mut repo, "get");

        let res = TestClient::get(format!("http://example.com/api/v1/customer/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
