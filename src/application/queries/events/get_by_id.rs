// src/application/queries/events/get_by_id.rs
use super::service::EventQueryService;
use crate::{application::error::ApplicationResult, domain::event::Event};

pub struct GetEventQuery {
    pub id: String,
}

/// Exactly one branch per lookup. `NotFound` keeps the requested id so the
/// caller can log it; it never reaches the response body.
#[derive(Debug)]
pub enum FetchEventOutcome {
    Found(Event),
    NotFound(String),
}

impl EventQueryService {
    pub async fn get_by_id(&self, query: GetEventQuery) -> ApplicationResult<FetchEventOutcome> {
        match self.repo.find_by_id(&query.id).await? {
            Some(event) => Ok(FetchEventOutcome::Found(event)),
            None => Ok(FetchEventOutcome::NotFound(query.id)),
        }
    }
}
