// src/application/queries/events/upcoming.rs
use super::service::EventQueryService;
use crate::{application::error::ApplicationResult, domain::event::Event};

impl EventQueryService {
    /// Events from today onward, in the store's chronological order. The
    /// order is passed through verbatim to the response.
    pub async fn upcoming(&self) -> ApplicationResult<Vec<Event>> {
        let today = self.clock.now().date_naive();
        let events = self.repo.list_upcoming(today).await?;
        Ok(events)
    }
}
