use crate::dtos::room::{
    AvailabilityParams, AvailabilityResponse, RoomResponse, RoomScheduleResponse,
};
use crate::routes::error_status;
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{
    db::create_connection,
    services::{availability::AvailabilityService, room::RoomService, schedule::ScheduleService},
};
use models::{
    slot::{TimeSlot, parse_wall_clock},
    weekday::Weekday,
};
use std::str::FromStr;
use uuid::Uuid;

/// List every room, active or not, sorted by name
#[utoipa::path(
    get,
    path = "/rooms",
    responses(
        (status = 200, description = "Rooms retrieved successfully", body = [RoomResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_rooms() -> Result<Json<Vec<RoomResponse>>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let rooms = RoomService::list(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

/// List one room's bookings, sorted by day of week then start time
#[utoipa::path(
    get,
    path = "/rooms/{id}/schedules",
    params(
        ("id" = Uuid, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Bookings retrieved successfully", body = [RoomScheduleResponse]),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_room_schedules(
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RoomScheduleResponse>>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let rows = ScheduleService::schedules_for_room(&db, id)
        .await
        .map_err(error_status)?;

    Ok(Json(
        rows.into_iter().map(RoomScheduleResponse::from).collect(),
    ))
}

/// Whether a room is free for a day and time window
#[utoipa::path(
    get,
    path = "/rooms/{id}/availability",
    params(
        ("id" = Uuid, Path, description = "Room ID"),
        AvailabilityParams
    ),
    responses(
        (status = 200, description = "Availability evaluated", body = AvailabilityResponse),
        (status = 400, description = "Malformed day or time token"),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Rooms"
)]
pub async fn get_room_availability(
    Path(id): Path<Uuid>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<AvailabilityResponse>, StatusCode> {
    let day = Weekday::from_str(&params.day).map_err(|_| StatusCode::BAD_REQUEST)?;
    let start = parse_wall_clock(&params.start).map_err(|_| StatusCode::BAD_REQUEST)?;
    let end = parse_wall_clock(&params.end).map_err(|_| StatusCode::BAD_REQUEST)?;

    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let room = RoomService::get(&db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let available = AvailabilityService::is_available(&db, &room, day, TimeSlot::new(start, end))
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(AvailabilityResponse { available }))
}
