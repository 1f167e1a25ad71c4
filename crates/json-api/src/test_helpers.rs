//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use taproom_app::{
    auth::{AuthScheme, MockAuthService, Principal},
    context::AppContext,
    domain::{
        beers::{
            MockBeersService,
            records::{BeerRecord, BeerStyle, BeerUuid},
        },
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        customers::{
            MockCustomersService,
            records::{CustomerRecord, CustomerUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_SUBJECT: &str = "TOPuser";

#[salvo::handler]
pub(crate) async fn inject_principal(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal {
        subject: TEST_SUBJECT.to_string(),
        scheme: AuthScheme::Basic,
    });
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_beer(uuid: BeerUuid) -> BeerRecord {
    BeerRecord {
        uuid,
        version: 1,
        name: "Galaxy Cat".to_string(),
        style: BeerStyle::PaleAle,
        upc: "12356222".to_string(),
        quantity_on_hand: Some(122),
        price: Decimal::new(1299, 2),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_customer(uuid: CustomerUuid) -> CustomerRecord {
    CustomerRecord {
        uuid,
        version: 1,
        name: "Customer 1".to_string(),
        email: Some("customer1@example.com".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_category(uuid: CategoryUuid) -> CategoryRecord {
    CategoryRecord {
        uuid,
        version: 1,
        description: "Hoppy".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn strict_beers_mock() -> MockBeersService {
    let mut beers = MockBeersService::new();

    beers.expect_list_beers().never();
    beers.expect_get_beer().never();
    beers.expect_create_beer().never();
    beers.expect_update_beer().never();
    beers.expect_patch_beer().never();
    beers.expect_delete_beer().never();

    beers
}

pub(crate) fn strict_customers_mock() -> MockCustomersService {
    let mut customers = MockCustomersService::new();

    customers.expect_list_customers().never();
    customers.expect_get_customer().never();
    customers.expect_create_customer().never();
    customers.expect_update_customer().never();
    customers.expect_patch_customer().never();
    customers.expect_delete_customer().never();

    customers
}

pub(crate) fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_create_category().never();
    categories.expect_add_beer_category().never();
    categories.expect_list_beer_categories().never();

    categories
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_basic().never();
    auth.expect_authenticate_bearer().never();

    auth
}

fn state(
    beers: MockBeersService,
    customers: MockCustomersService,
    categories: MockCategoriesService,
    auth: MockAuthService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        beers: Arc::new(beers),
        customers: Arc::new(customers),
        categories: Arc::new(categories),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(
        strict_beers_mock(),
        strict_customers_mock(),
        strict_categories_mock(),
        auth,
    )
}

fn authenticated_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_principal)
            .push(route),
    )
}

pub(crate) fn beers_service(beers: MockBeersService, route: Router) -> Service {
    authenticated_service(
        state(
            beers,
            strict_customers_mock(),
            strict_categories_mock(),
            strict_auth_mock(),
        ),
        route,
    )
}

pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    authenticated_service(
        state(
            strict_beers_mock(),
            customers,
            strict_categories_mock(),
            strict_auth_mock(),
        ),
        route,
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    authenticated_service(
        state(
            strict_beers_mock(),
            strict_customers_mock(),
            categories,
            strict_auth_mock(),
        ),
        route,
    )
}
