pub mod errors;
pub mod event;
