//! Category Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taproom_app::domain::categories::{data::CategoryInput, records::CategoryRecord};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryRequest {
    /// Up to 50 characters
    pub description: Option<String>,
}

impl From<CategoryRequest> for CategoryInput {
    fn from(request: CategoryRequest) -> Self {
        CategoryInput {
            description: request.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryResponse {
    pub id: Uuid,

    pub version: i32,

    pub description: String,

    pub created_date: String,

    pub update_date: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            id: category.uuid.into(),
            version: category.version,
            description: category.description,
            created_date: category.created_at.to_string(),
            update_date: category.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryCreatedResponse {
    pub id: Uuid,
}
