use crate::dtos::room::RoomScheduleResponse;
use crate::dtos::timetable::{ConflictReportResponse, ScheduleRequest};
use crate::routes::error_status;
use axum::{Json, extract::Path, http::StatusCode};
use database::{
    db::create_connection,
    services::schedule::{ScheduleService, SlotProposal},
};
use models::{
    slot::{TimeSlot, parse_wall_clock},
    weekday::Weekday,
};
use std::str::FromStr;
use uuid::Uuid;

/// Commit one room/day/slot assignment for a course.
///
/// Availability should have been checked beforehand (timetable or
/// availability endpoints); a concurrent booking of the same window is
/// rejected with 409 and the caller reruns allocation.
#[utoipa::path(
    post,
    path = "/courses/{id}/schedules",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = ScheduleRequest,
    responses(
        (status = 201, description = "Schedule created", body = RoomScheduleResponse),
        (status = 400, description = "Malformed day or time token"),
        (status = 404, description = "Course or room not found"),
        (status = 409, description = "Slot taken by a concurrent request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedules"
)]
pub async fn create_schedule(
    Path(id): Path<Uuid>,
    Json(body): Json<ScheduleRequest>,
) -> Result<(StatusCode, Json<RoomScheduleResponse>), StatusCode> {
    let proposal = parse_proposal(&body)?;

    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let created = ScheduleService::schedule_room(&db, id, proposal)
        .await
        .map_err(error_status)?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Advisory conflict report for a proposed slot
#[utoipa::path(
    post,
    path = "/schedules/conflicts",
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Conflict report", body = ConflictReportResponse),
        (status = 400, description = "Malformed day or time token"),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedules"
)]
pub async fn check_conflicts(
    Json(body): Json<ScheduleRequest>,
) -> Result<Json<ConflictReportResponse>, StatusCode> {
    let proposal = parse_proposal(&body)?;

    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let conflicts = ScheduleService::check_for_conflicts(&db, proposal)
        .await
        .map_err(error_status)?;

    Ok(Json(ConflictReportResponse { conflicts }))
}

fn parse_proposal(body: &ScheduleRequest) -> Result<SlotProposal, StatusCode> {
    let day = Weekday::from_str(&body.day).map_err(|_| StatusCode::BAD_REQUEST)?;
    let start = parse_wall_clock(&body.start_time).map_err(|_| StatusCode::BAD_REQUEST)?;
    let end = parse_wall_clock(&body.end_time).map_err(|_| StatusCode::BAD_REQUEST)?;

    Ok(SlotProposal {
        room_id: body.room_id,
        day,
        window: TimeSlot::new(start, end),
    })
}
