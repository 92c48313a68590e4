pub mod create;
pub mod service;

pub use create::{CreateEventCommand, CreateEventOutcome};
pub use service::EventCommandService;
