// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::events::EventCommandService, ports::time::Clock,
        queries::events::EventQueryService,
    },
    domain::event::EventRepository,
};

pub struct ApplicationServices {
    pub event_commands: Arc<EventCommandService>,
    pub event_queries: Arc<EventQueryService>,
}

impl ApplicationServices {
    pub fn new(repo: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            event_commands: Arc::new(EventCommandService::new(
                Arc::clone(&repo),
                Arc::clone(&clock),
            )),
            event_queries: Arc::new(EventQueryService::new(repo, clock)),
        }
    }
}
