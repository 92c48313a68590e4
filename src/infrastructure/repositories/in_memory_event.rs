// src/infrastructure/repositories/in_memory_event.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::{Event, EventId, EventRepository, NewEvent};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory event store. Insertion order is retained; `list_upcoming`
/// sorts by date with a stable sort, so same-day events keep insertion
/// order.
#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventRepository {
    fn read_guard(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, Vec<Event>>> {
        self.events
            .read()
            .map_err(|_| DomainError::Persistence("event store lock poisoned".into()))
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event> {
        let id = EventId::new(Uuid::new_v4().to_string())?;
        let stored = Event {
            id,
            title: event.title,
            date: event.date,
        };

        let mut events = self
            .events
            .write()
            .map_err(|_| DomainError::Persistence("event store lock poisoned".into()))?;
        events.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Event>> {
        let events = self.read_guard()?;
        Ok(events.iter().find(|e| e.id.as_str() == id).cloned())
    }

    async fn list_upcoming(&self, from: NaiveDate) -> DomainResult<Vec<Event>> {
        let events = self.read_guard()?;
        let mut upcoming: Vec<Event> = events.iter().filter(|e| e.date >= from).cloned().collect();
        upcoming.sort_by_key(|e| e.date);
        Ok(upcoming)
    }
}
