//! Customer Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRecord>;

/// Customer Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub uuid: CustomerUuid,
    pub version: i32,
    pub name: String,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
