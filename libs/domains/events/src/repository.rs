//! Event repository trait

use crate::error::EventResult;
use crate::models::Event;
use async_trait::async_trait;

/// Repository trait for event access
///
/// Every event handed out has already been through
/// [`Event::repair_foreign_keys`].
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events; empty when the API is unreachable or unreadable
    async fn get_all(&self) -> Vec<Event>;

    /// Event by ID
    async fn get_by_id(&self, id: i32) -> Option<Event>;

    /// Store a new event
    async fn create(&self, event: Event) -> EventResult<Event>;

    /// Replace the event stored under `event.id`
    async fn update(&self, event: Event) -> EventResult<Event>;

    /// Delete event by ID; `false` when the API refused
    async fn delete(&self, id: i32) -> EventResult<bool>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub EventRepository {}

        #[async_trait]
        impl EventRepository for EventRepository {
            async fn get_all(&self) -> Vec<Event>;
            async fn get_by_id(&self, id: i32) -> Option<Event>;
            async fn create(&self, event: Event) -> EventResult<Event>;
            async fn update(&self, event: Event) -> EventResult<Event>;
            async fn delete(&self, id: i32) -> EventResult<bool>;
        }
    }
}
