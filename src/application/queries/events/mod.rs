pub mod get_by_id;
pub mod service;
pub mod upcoming;

pub use get_by_id::{FetchEventOutcome, GetEventQuery};
pub use service::EventQueryService;
