//! Categories Data

use jiff::Timestamp;

use crate::domain::{
    categories::records::{CategoryRecord, CategoryUuid},
    validation::{ValidationErrors, required_text},
};

pub(crate) const DESCRIPTION_MAX: usize = 50;

/// Category fields exactly as a client supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryInput {
    pub description: Option<String>,
}

/// New Category Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub description: String,
}

impl TryFrom<CategoryInput> for NewCategory {
    type Error = ValidationErrors;

    fn try_from(input: CategoryInput) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        required_text(&mut errors, "description", input.description.as_deref(), DESCRIPTION_MAX);

        match input.description {
            Some(description) if errors.is_empty() => Ok(Self { description }),
            _ => Err(errors),
        }
    }
}

impl NewCategory {
    pub(crate) fn into_record(self, now: Timestamp) -> CategoryRecord {
        CategoryRecord {
            uuid: CategoryUuid::new(),
            version: 1,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_required() {
        let result = NewCategory::try_from(CategoryInput::default());

        assert!(matches!(result, Err(ref errors) if errors.contains("description")));
    }

    #[test]
    fn oversized_description_is_rejected() {
        let result = NewCategory::try_from(CategoryInput {
            description: Some("x".repeat(DESCRIPTION_MAX + 1)),
        });

        assert!(matches!(result, Err(ref errors) if errors.len() == 1));
    }
}
