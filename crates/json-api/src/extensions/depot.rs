//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use taproom_app::auth::Principal;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_principal(&mut self, principal: Principal);

    fn principal_or_401(&self) -> Result<&Principal, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal_or_401(&self) -> Result<&Principal, StatusError> {
        self.obtain::<Principal>()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use taproom_app::auth::AuthScheme;

    use super::*;

    #[test]
    fn principal_round_trips_through_depot() {
        let mut depot = Depot::new();

        assert!(depot.principal_or_401().is_err(), "empty depot has no principal");

        depot.insert_principal(Principal {
            subject: "TOPuser".to_string(),
            scheme: AuthScheme::Basic,
        });

        let principal = depot.principal_or_401().map(|p| p.subject.clone());

        assert_eq!(principal.ok().as_deref(), Some("TOPuser"));
    }
}
