// src/application/commands/events/create.rs
use super::service::EventCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::event::{Event, EventTitle, NewEvent, ValidationError},
};
use chrono::NaiveDate;

pub struct CreateEventCommand {
    pub title: String,
    pub date: NaiveDate,
}

/// Every invocation produces exactly one of these branches; the HTTP layer
/// turns them into a response with a single exhaustive match.
#[derive(Debug)]
pub enum CreateEventOutcome {
    Created(Event),
    /// Non-empty, in the order the rules were checked. The order is part of
    /// the response contract.
    Rejected(Vec<ValidationError>),
}

impl EventCommandService {
    /// Validates and stores a new event. Rule order is fixed: title first,
    /// then date. A date of today is acceptable; only strictly-past dates
    /// are rejected. Nothing is stored when any rule fails.
    pub async fn create_event(
        &self,
        command: CreateEventCommand,
    ) -> ApplicationResult<CreateEventOutcome> {
        let today = self.clock.now().date_naive();

        let mut errors = Vec::new();
        if command.title.trim().is_empty() {
            errors.push(ValidationError::TitleIsRequired);
        }
        if command.date < today {
            errors.push(ValidationError::DateMustNotBePast);
        }
        if !errors.is_empty() {
            return Ok(CreateEventOutcome::Rejected(errors));
        }

        let title = EventTitle::new(command.title)?;
        let created = self
            .repo
            .insert(NewEvent {
                title,
                date: command.date,
            })
            .await?;

        tracing::info!(event_id = %created.id, "event created");
        Ok(CreateEventOutcome::Created(created))
    }
}
