//! Customer Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taproom_app::domain::customers::{data::CustomerInput, records::CustomerRecord};

/// Body accepted by create, replace and patch.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerRequest {
    /// Expected current version; a mismatch on replace is a conflict
    pub version: Option<i32>,

    /// Up to 255 characters
    pub customer_name: Option<String>,

    /// Up to 255 characters
    pub email: Option<String>,
}

impl From<CustomerRequest> for CustomerInput {
    fn from(request: CustomerRequest) -> Self {
        CustomerInput {
            version: request.version,
            name: request.customer_name,
            email: request.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerResponse {
    pub id: Uuid,

    pub customer_name: String,

    pub version: i32,

    pub email: Option<String>,

    pub created_date: String,

    pub last_modified_date: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        CustomerResponse {
            id: customer.uuid.into(),
            customer_name: customer.name,
            version: customer.version,
            email: customer.email,
            created_date: customer.created_at.to_string(),
            last_modified_date: customer.updated_at.to_string(),
        }
    }
}

/// Customer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerCreatedResponse {
    /// Id assigned to the new customer
    pub id: Uuid,
}
