pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Event, NewEvent};
pub use repository::EventRepository;
pub use validation::ValidationError;
pub use value_objects::{EventId, EventTitle};
