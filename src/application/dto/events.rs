use crate::domain::event::Event;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire format for dates: calendar date, no time component.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire projection of an [`Event`]. Field names and the date format are the
/// external contract; keep them stable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: String,
    pub title: String,
    /// Formatted `yyyy-MM-dd`.
    pub date: String,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.into(),
            title: event.title.into(),
            date: event.date.format(DATE_FORMAT).to_string(),
        }
    }
}
