use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Category entity as exchanged with the remote API
///
/// Only `id` is required on decode; everything else falls back to its
/// default when missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned identifier (0 until created)
    pub id: i32,
    #[serde(default, deserialize_with = "remote_api::fields::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "remote_api::fields::null_as_default")]
    pub description: String,
}

impl Category {
    /// Overwrite the editable fields from a validated DTO.
    pub fn apply(&mut self, dto: CategoryDto) {
        self.name = dto.name;
        self.description = dto.description;
    }
}

/// A not-yet-created category (id 0) carrying the DTO's fields.
impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: 0,
            name: dto.name,
            description: dto.description,
        }
    }
}

fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Category name is required")));
    }
    if name.chars().count() > 100 {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed(
            "Category name cannot be longer than 100 characters",
        )));
    }
    Ok(())
}

/// DTO for creating or updating a category
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[validate(custom(function = "validate_category_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Description cannot be longer than 500 characters"))]
    pub description: String,
}
