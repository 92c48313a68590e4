use crate::domain::errors::DomainResult;
use crate::domain::event::entity::{Event, NewEvent};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Event>>;
    /// Events on or after `from`, chronologically ascending.
    async fn list_upcoming(&self, from: NaiveDate) -> DomainResult<Vec<Event>>;
}
