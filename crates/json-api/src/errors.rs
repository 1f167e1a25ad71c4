//! Handler error type.

use std::collections::BTreeMap;

use salvo::{
    oapi::{Components, EndpointOutRegister, Operation},
    prelude::*,
};

use taproom_app::domain::validation::ValidationErrors;

/// Errors a handler can answer with.
///
/// Validation failures render as a `400` whose body is a JSON array of
/// single-entry `{ "field": "message" }` objects; everything else is a plain
/// [`StatusError`].
#[derive(Debug)]
pub(crate) enum ApiError {
    Status(StatusError),
    Validation(ValidationErrors),
}

impl From<StatusError> for ApiError {
    fn from(error: StatusError) -> Self {
        Self::Status(error)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

pub(crate) fn validation_body(errors: &ValidationErrors) -> Vec<BTreeMap<&'static str, String>> {
    errors
        .iter()
        .map(|error| BTreeMap::from([(error.field, error.message.clone())]))
        .collect()
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        match self {
            Self::Status(error) => res.render(error),
            Self::Validation(errors) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(validation_body(&errors)));
            }
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        StatusError::register(components, operation);
    }
}
