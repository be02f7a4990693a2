//! Remote API implementation of [`EventRepository`]

use async_trait::async_trait;
use remote_api::{ApiClient, Endpoint};
use tracing::instrument;

use crate::error::EventResult;
use crate::models::Event;
use crate::repository::EventRepository;

pub const EVENTS: Endpoint = Endpoint::new("/api/v1/events", "event", "events");

/// Events over HTTP, with foreign-key repair applied to every decoded event
#[derive(Clone)]
pub struct HttpEventRepository {
    client: ApiClient,
}

impl HttpEventRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn repaired(&self, mut event: Event) -> Event {
        for backfill in event.repair_foreign_keys() {
            self.client.observer().foreign_key_backfilled(
                EVENTS.collection_key,
                event.id,
                backfill.field,
                backfill.value,
            );
        }
        event
    }
}

#[async_trait]
impl EventRepository for HttpEventRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Vec<Event> {
        self.client
            .get_list::<Event>(&EVENTS)
            .await
            .into_iter()
            .map(|event| self.repaired(event))
            .collect()
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> Option<Event> {
        self.client
            .get_one::<Event>(&EVENTS, id)
            .await
            .map(|event| self.repaired(event))
    }

    #[instrument(skip(self, event), fields(event_title = %event.title))]
    async fn create(&self, event: Event) -> EventResult<Event> {
        let created: Event = self.client.create(&EVENTS, &event).await?;
        Ok(self.repaired(created))
    }

    #[instrument(skip(self, event), fields(event_id = event.id))]
    async fn update(&self, event: Event) -> EventResult<Event> {
        let updated: Event = self.client.update(&EVENTS, event.id, &event).await?;
        Ok(self.repaired(updated))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> EventResult<bool> {
        Ok(self.client.delete(&EVENTS, id).await?)
    }
}
