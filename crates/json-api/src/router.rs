//! App Router

use salvo::Router;

use crate::{auth, beers, categories, customers};

pub(crate) fn app_router() -> Router {
    Router::with_path("api/v1")
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("beer")
                .get(beers::index::handler)
                .post(beers::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(beers::get::handler)
                        .put(beers::update::handler)
                        .patch(beers::patch::handler)
                        .delete(beers::delete::handler)
                        .push(
                            Router::with_path("category")
                                .get(categories::beer_index::handler)
                                .push(
                                    Router::with_path("{category_id}")
                                        .put(categories::link::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("customer")
                .get(customers::index::handler)
                .post(customers::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(customers::get::handler)
                        .put(customers::update::handler)
                        .patch(customers::patch::handler)
                        .delete(customers::delete::handler),
                ),
        )
        .push(
            Router::with_path("category")
                .get(categories::index::handler)
                .post(categories::create::handler),
        )
}
