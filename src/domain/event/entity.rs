use crate::domain::event::value_objects::{EventId, EventTitle};
use chrono::NaiveDate;

/// A calendar event: a title pinned to a single day. Immutable once the
/// store has assigned its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: EventTitle,
    pub date: NaiveDate,
}

/// An event that passed validation but has not been stored yet; the store
/// assigns the id on insert.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: EventTitle,
    pub date: NaiveDate,
}
