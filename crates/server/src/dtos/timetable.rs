use database::services::timetable::{DayPlacement, DaySlot};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TimetableRequest {
    /// Days to schedule, in the order results should come back
    pub days: Vec<String>,

    /// Optional candidate slot override; defaults to the five standard
    /// teaching slots when omitted
    #[serde(default)]
    pub slots: Option<Vec<SlotWindow>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlotWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TimetableResponse {
    pub days: Vec<DaySlotResponse>,
}

/// One requested day: either an assignment or a per-day error
#[derive(Debug, Serialize, ToSchema)]
pub struct DaySlotResponse {
    pub day: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<DayPlacement> for DaySlotResponse {
    fn from(placement: DayPlacement) -> Self {
        let day = placement.day.to_string();

        match placement.slot {
            DaySlot::Assigned { room, window } => Self {
                day,
                room_id: Some(room.id.to_string()),
                room_name: Some(room.name),
                start_time: Some(window.start.format("%H:%M").to_string()),
                end_time: Some(window.end.format("%H:%M").to_string()),
                error: None,
            },
            DaySlot::Unavailable { message } => Self {
                day,
                room_id: None,
                room_name: None,
                start_time: None,
                end_time: None,
                error: Some(message),
            },
        }
    }
}

/// Proposed (room, day, window) for persistence or conflict checking
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScheduleRequest {
    pub room_id: Uuid,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConflictReportResponse {
    pub conflicts: Vec<String>,
}
