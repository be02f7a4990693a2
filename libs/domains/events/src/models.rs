//! Event domain models

use chrono::NaiveDateTime;
use domain_categories::Category;
use domain_locations::Location;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A scheduled event
///
/// `category` and `location` are only present when the remote API embeds
/// them. When present they are serialized as is, so [`Event::apply`] drops any
/// embedded object that no longer matches its flat key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,

    #[serde(default, deserialize_with = "remote_api::fields::null_as_default")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, alias = "startdate", with = "remote_api::datetime")]
    pub start_date: NaiveDateTime,

    #[serde(default, alias = "enddate", with = "remote_api::datetime")]
    pub end_date: NaiveDateTime,

    /// Opaque status code owned by the remote API
    #[serde(default, deserialize_with = "remote_api::fields::null_as_default")]
    pub status: i32,

    #[serde(
        default,
        alias = "categoryid",
        deserialize_with = "remote_api::fields::null_as_default"
    )]
    pub category_id: i32,

    #[serde(
        default,
        alias = "locationid",
        deserialize_with = "remote_api::fields::null_as_default"
    )]
    pub location_id: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A flat foreign key filled in by [`Event::repair_foreign_keys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backfill {
    pub field: &'static str,
    pub value: i32,
}

impl Event {
    /// Fill a zero `categoryId`/`locationId` from the embedded object's id.
    ///
    /// Non-zero keys are never overwritten.
    pub fn repair_foreign_keys(&mut self) -> Vec<Backfill> {
        let mut backfills = Vec::new();

        if self.category_id == 0 {
            if let Some(category) = &self.category {
                self.category_id = category.id;
                backfills.push(Backfill {
                    field: "categoryId",
                    value: category.id,
                });
            }
        }
        if self.location_id == 0 {
            if let Some(location) = &self.location {
                self.location_id = location.id;
                backfills.push(Backfill {
                    field: "locationId",
                    value: location.id,
                });
            }
        }

        backfills
    }

    /// Overwrite the editable fields from a validated DTO.
    ///
    /// `id` and `status` are kept. An embedded category or location is kept
    /// only while its id still equals the new flat key.
    pub fn apply(&mut self, dto: EventDto) {
        self.title = dto.title;
        self.description = dto.description;
        self.start_date = dto.start_date.unwrap_or_default();
        self.end_date = dto.end_date.unwrap_or_default();
        self.category_id = dto.category_id;
        self.location_id = dto.location_id;

        if self.category.as_ref().is_some_and(|c| c.id != self.category_id) {
            self.category = None;
        }
        if self.location.as_ref().is_some_and(|l| l.id != self.location_id) {
            self.location = None;
        }
    }
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        let mut event = Event::default();
        event.apply(dto);
        event
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Title is required")));
    }
    let len = title.chars().count();
    if !(3..=200).contains(&len) {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed(
            "Title must be between 3 and 200 characters",
        )));
    }
    Ok(())
}

/// DTO for creating or updating an event
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Description cannot be longer than 2000 characters"))]
    pub description: Option<String>,

    #[serde(default, with = "remote_api::datetime::option")]
    #[schema(value_type = String, example = "2025-09-01T00:00:00")]
    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<NaiveDateTime>,

    #[serde(default, with = "remote_api::datetime::option")]
    #[schema(value_type = String, example = "2025-09-03T00:00:00")]
    #[validate(required(message = "End date is required"))]
    pub end_date: Option<NaiveDateTime>,

    #[serde(default)]
    #[validate(range(min = 1, message = "Please select a valid category"))]
    pub category_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "Please select a valid location"))]
    pub location_id: i32,
}
