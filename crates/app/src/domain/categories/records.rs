//! Category Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub version: i32,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
