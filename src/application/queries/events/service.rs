use crate::application::ports::time::Clock;
use crate::domain::event::EventRepository;
use std::sync::Arc;

pub struct EventQueryService {
    pub(crate) repo: Arc<dyn EventRepository>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl EventQueryService {
    pub fn new(repo: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
