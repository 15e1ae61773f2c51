use crate::dtos::timetable::{DaySlotResponse, TimetableRequest, TimetableResponse};
use crate::routes::error_status;
use axum::{Json, extract::Path, http::StatusCode};
use database::{db::create_connection, services::timetable::TimetableService};
use models::{
    slot::{TimeSlot, default_slots, parse_wall_clock},
    weekday::Weekday,
};
use std::str::FromStr;
use uuid::Uuid;

/// Propose a first-fit timetable for a course across the requested days.
///
/// Nothing is persisted; each returned day carries either an assignment or
/// a per-day error, and accepted assignments are committed one by one via
/// the schedules endpoint.
#[utoipa::path(
    post,
    path = "/courses/{id}/timetable",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = TimetableRequest,
    responses(
        (status = 200, description = "Timetable generated", body = TimetableResponse),
        (status = 400, description = "Malformed day or time token"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timetable"
)]
pub async fn generate_timetable(
    Path(id): Path<Uuid>,
    Json(body): Json<TimetableRequest>,
) -> Result<Json<TimetableResponse>, StatusCode> {
    let days = body
        .days
        .iter()
        .map(|day| Weekday::from_str(day))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    let catalog = match body.slots {
        Some(windows) => windows
            .iter()
            .map(|w| {
                Ok(TimeSlot::new(
                    parse_wall_clock(&w.start)?,
                    parse_wall_clock(&w.end)?,
                ))
            })
            .collect::<Result<Vec<_>, String>>()
            .map_err(|_| StatusCode::BAD_REQUEST)?,
        None => default_slots(),
    };

    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let placements = TimetableService::generate_timetable(&db, id, &days, &catalog)
        .await
        .map_err(error_status)?;

    Ok(Json(TimetableResponse {
        days: placements.into_iter().map(DaySlotResponse::from).collect(),
    }))
}
