use crate::{
    entities::{course, room, room_schedule},
    error::ScheduleError,
    services::room::RoomService,
};
use futures::future::try_join_all;
use models::{
    slot::TimeSlot,
    timetable::{NO_ROOMS_AVAILABLE, first_fit},
    weekday::Weekday,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

/// Outcome of one day's first-fit search
#[derive(Debug, Clone, PartialEq)]
pub enum DaySlot {
    Assigned { room: room::Model, window: TimeSlot },
    Unavailable { message: String },
}

/// One entry per requested day, in request order
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlacement {
    pub day: Weekday,
    pub slot: DaySlot,
}

pub struct TimetableService;

impl TimetableService {
    /// Greedy first-fit timetable for a course.
    ///
    /// Each requested day is searched independently against the candidate
    /// catalog and the active rooms, so a slot chosen for one day never
    /// constrains another and different days may land in different rooms.
    /// A day with no free combination is reported in its placement rather
    /// than failing the batch; the caller decides what to do with partial
    /// results. Nothing is persisted here — committing a placement is
    /// [`super::schedule::ScheduleService::schedule_room`].
    pub async fn generate_timetable(
        db: &DatabaseConnection,
        course_id: Uuid,
        days: &[Weekday],
        catalog: &[TimeSlot],
    ) -> Result<Vec<DayPlacement>, ScheduleError> {
        if course::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(ScheduleError::CourseNotFound(course_id));
        }

        // Days are independent; try_join_all keeps results in request order
        let placements = try_join_all(days.iter().map(|&day| Self::place_day(db, day, catalog)))
            .await?;

        Ok(placements)
    }

    async fn place_day(
        db: &DatabaseConnection,
        day: Weekday,
        catalog: &[TimeSlot],
    ) -> Result<DayPlacement, ScheduleError> {
        let rooms = RoomService::active_ordered(db).await?;

        if rooms.is_empty() {
            return Ok(DayPlacement {
                day,
                slot: DaySlot::Unavailable {
                    message: NO_ROOMS_AVAILABLE.to_string(),
                },
            });
        }

        // One batched fetch for the day, grouped per room afterwards
        let room_ids: Vec<Uuid> = rooms.iter().map(|r| r.id).collect();
        let bookings = room_schedule::Entity::find()
            .filter(room_schedule::Column::RoomId.is_in(room_ids))
            .filter(room_schedule::Column::DayOfWeek.eq(day))
            .all(db)
            .await?;

        let mut bookings_by_room: HashMap<Uuid, Vec<TimeSlot>> = HashMap::new();
        for row in bookings {
            bookings_by_room
                .entry(row.room_id)
                .or_default()
                .push(TimeSlot::new(row.time_start, row.time_end));
        }

        let per_room: Vec<Vec<TimeSlot>> = rooms
            .iter()
            .map(|r| bookings_by_room.remove(&r.id).unwrap_or_default())
            .collect();

        let slot = match first_fit(&per_room, catalog) {
            Some((room_idx, window)) => DaySlot::Assigned {
                room: rooms[room_idx].clone(),
                window,
            },
            None => DaySlot::Unavailable {
                message: NO_ROOMS_AVAILABLE.to_string(),
            },
        };

        Ok(DayPlacement { day, slot })
    }
}
