pub mod courses;
pub mod health;
pub mod root;
pub mod rooms;
pub mod schedules;
pub mod timetable;

use axum::http::StatusCode;
use database::error::ScheduleError;

/// Maps service errors onto HTTP status codes
pub fn error_status(err: ScheduleError) -> StatusCode {
    match err {
        ScheduleError::RoomNotFound(_) | ScheduleError::CourseNotFound(_) => StatusCode::NOT_FOUND,
        ScheduleError::SlotTaken => StatusCode::CONFLICT,
        ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
