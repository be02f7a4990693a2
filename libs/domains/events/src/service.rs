//! Event service

use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventDto};
use crate::repository::EventRepository;

/// Event service combining validation with remote persistence
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all_events(&self) -> Vec<Event> {
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_event_by_id(&self, id: i32) -> Option<Event> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, dto), fields(event_title = %dto.title))]
    pub async fn create_event(&self, dto: EventDto) -> EventResult<Event> {
        dto.validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        let created = self.repository.create(Event::from(dto)).await?;
        info!(event_id = created.id, "Event created");
        Ok(created)
    }

    /// Overwrite title, description, dates and foreign keys of an existing
    /// event. Fails with `NotFound` without writing when the ID is unknown.
    #[instrument(skip(self, dto))]
    pub async fn update_event(&self, id: i32, dto: EventDto) -> EventResult<Event> {
        dto.validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await
            .ok_or(EventError::NotFound(id))?;

        existing.apply(dto);
        self.repository.update(existing).await
    }

    #[instrument(skip(self))]
    pub async fn delete_event(&self, id: i32) -> EventResult<bool> {
        self.repository.delete(id).await
    }
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
