// src/presentation/http/controllers/events.rs
use crate::application::{
    commands::events::{CreateEventCommand, CreateEventOutcome},
    dto::{DATE_FORMAT, EventDto},
    queries::events::{FetchEventOutcome, GetEventQuery},
};
use crate::presentation::http::error::{
    HttpError, HttpResult, IntoHttpResult, ValidationErrorResponse,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub title: String,
    /// Calendar date, `yyyy-MM-dd`.
    pub date: String,
}

/// A date string that does not parse is a malformed request, rejected
/// before the use-case runs. Domain validation (past date) happens later
/// and answers 422 instead.
fn parse_event_date(raw: &str) -> Result<NaiveDate, HttpError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| HttpError::bad_request(format!("invalid date '{raw}': expected yyyy-MM-dd")))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created; Location points at it.", body = EventDto),
        (status = 400, description = "Malformed request, e.g. an unparsable date."),
        (status = 422, description = "Domain validation failed.", body = ValidationErrorResponse)
    ),
    tag = "Events"
)]
pub async fn create_event(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateEventRequest>,
) -> HttpResult<Response> {
    let date = parse_event_date(&payload.date)?;

    let outcome = state
        .services
        .event_commands
        .create_event(CreateEventCommand {
            title: payload.title,
            date,
        })
        .await
        .into_http()?;

    Ok(match outcome {
        CreateEventOutcome::Created(event) => {
            let location = format!("/api/events/{}", event.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(EventDto::from(event)),
            )
                .into_response()
        }
        CreateEventOutcome::Rejected(errors) => {
            ValidationErrorResponse::from_errors(&errors).into_response()
        }
    })
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = String, Path, description = "Opaque event identifier.")),
    responses(
        (status = 200, description = "The event.", body = EventDto),
        (status = 404, description = "No event with that identifier.")
    ),
    tag = "Events"
)]
pub async fn get_event(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .event_queries
        .get_by_id(GetEventQuery { id })
        .await
        .into_http()?;

    Ok(match outcome {
        FetchEventOutcome::Found(event) => Json(EventDto::from(event)).into_response(),
        FetchEventOutcome::NotFound(requested_id) => {
            tracing::debug!(event_id = %requested_id, "event not found");
            StatusCode::NOT_FOUND.into_response()
        }
    })
}

#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    responses(
        (status = 200, description = "Events from today onward, soonest first.", body = [EventDto])
    ),
    tag = "Events"
)]
pub async fn list_upcoming_events(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<EventDto>>> {
    let events = state
        .services
        .event_queries
        .upcoming()
        .await
        .into_http()?;

    Ok(Json(events.into_iter().map(EventDto::from).collect()))
}
