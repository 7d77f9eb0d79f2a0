use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Body of category create and rename requests.
#[derive(Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 3, max = 15))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFormPayload {
    pub name: CategoryName,
}

impl CategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory { name: self.name }
    }
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category form validation failed: {0}")]
    Validation(String),
    #[error("Category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CategoryForm> for CategoryFormPayload {
    type Error = CategoryFormError;

    fn try_from(value: CategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CategoryName::new(value.name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_within_bounds() {
        let payload: CategoryFormPayload = CategoryForm {
            name: "Music".to_string(),
        }
        .try_into()
        .unwrap();

        assert_eq!(payload.name.as_str(), "Music");
    }

    #[test]
    fn rejects_two_character_names() {
        let result: Result<CategoryFormPayload, _> = CategoryForm {
            name: "AB".to_string(),
        }
        .try_into();

        assert!(matches!(result, Err(CategoryFormError::Validation(_))));
    }
}
