pub mod in_memory_event;

pub use in_memory_event::InMemoryEventRepository;
