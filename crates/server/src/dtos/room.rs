use database::entities::{room, room_schedule};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub is_active: bool,
}

impl From<room::Model> for RoomResponse {
    fn from(room: room::Model) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name,
            location: room.location,
            capacity: room.capacity,
            is_active: room.is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomScheduleResponse {
    pub id: String,
    pub course_id: String,
    pub room_id: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub recurring: bool,
}

impl From<room_schedule::Model> for RoomScheduleResponse {
    fn from(row: room_schedule::Model) -> Self {
        Self {
            id: row.id.to_string(),
            course_id: row.course_id.to_string(),
            room_id: row.room_id.to_string(),
            day: row.day_of_week.to_string(),
            start_time: row.time_start.format("%H:%M").to_string(),
            end_time: row.time_end.format("%H:%M").to_string(),
            recurring: row.recurring,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct AvailabilityParams {
    /// Day token, e.g. "monday"
    pub day: String,

    /// Window start as zero-padded 24-hour HH:MM
    pub start: String,

    /// Window end as zero-padded 24-hour HH:MM
    pub end: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub available: bool,
}
