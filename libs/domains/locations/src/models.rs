use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{LocationError, LocationResult};

/// Venue where events take place
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i32,
    #[serde(default, deserialize_with = "remote_api::fields::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "remote_api::fields::null_as_default")]
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, alias = "postalcode")]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

fn required_within(
    value: &str,
    max: usize,
    required: &'static str,
    too_long: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(required)));
    }
    if value.chars().count() > max {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed(too_long)));
    }
    Ok(())
}

fn validate_location_name(name: &str) -> Result<(), ValidationError> {
    required_within(
        name,
        100,
        "Location name is required",
        "Location name cannot be longer than 100 characters",
    )
}

fn validate_address(address: &str) -> Result<(), ValidationError> {
    required_within(
        address,
        200,
        "Address is required",
        "Address cannot be longer than 200 characters",
    )
}

/// Location form input
///
/// No endpoint accepts it; callers use [`LocationDto::check`] for
/// form-level validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    #[validate(custom(function = "validate_location_name"))]
    pub name: String,
    #[validate(custom(function = "validate_address"))]
    pub address: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "City cannot be longer than 100 characters"))]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "State cannot be longer than 100 characters"))]
    pub state: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20, message = "Postal code cannot be longer than 20 characters"))]
    pub postal_code: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "Country cannot be longer than 100 characters"))]
    pub country: Option<String>,
}

impl LocationDto {
    pub fn check(&self) -> LocationResult<()> {
        self.validate()
            .map_err(|e| LocationError::Validation(e.to_string()))
    }
}
