pub mod events;

pub use events::{DATE_FORMAT, EventDto};
