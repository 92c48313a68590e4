// src/presentation/http/openapi.rs
use crate::application::dto::EventDto;
use crate::presentation::http::controllers::events;
use crate::presentation::http::error::{ErrorMessage, ValidationErrorResponse};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "eventboard", description = "Event calendar HTTP API."),
    paths(
        crate::presentation::http::routes::health,
        events::create_event,
        events::get_event,
        events::list_upcoming_events,
    ),
    components(schemas(
        EventDto,
        ErrorMessage,
        ValidationErrorResponse,
        events::CreateEventRequest,
        StatusResponse
    )),
    tags(
        (name = "Events", description = "Create and read calendar events."),
        (name = "System", description = "Service plumbing.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
