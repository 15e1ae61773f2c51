use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Name of the exclusion constraint that rejects overlapping bookings for
/// the same room and day. Insert failures mentioning it are surfaced as
/// [`ScheduleError::SlotTaken`].
pub const NO_OVERLAP_CONSTRAINT: &str = "no_overlapping_room_schedules";

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("room {0} not found")]
    RoomNotFound(Uuid),

    #[error("course {0} not found")]
    CourseNotFound(Uuid),

    /// A concurrent request booked the same room, day and window first.
    /// Callers retry allocation with the now-stale slot excluded.
    #[error("the requested room, day and time window was booked by a concurrent request")]
    SlotTaken,

    #[error(transparent)]
    Database(DbErr),
}

impl From<DbErr> for ScheduleError {
    fn from(err: DbErr) -> Self {
        if err.to_string().contains(NO_OVERLAP_CONSTRAINT) {
            Self::SlotTaken
        } else {
            Self::Database(err)
        }
    }
}
