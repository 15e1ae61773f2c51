use crate::{
    entities::{course, room, room_schedule},
    error::ScheduleError,
    services::availability::AvailabilityService,
};
use chrono::Utc;
use log::info;
use models::{slot::TimeSlot, weekday::Weekday};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};
use uuid::Uuid;

/// A (room, day, interval) assignment proposed for persistence
#[derive(Debug, Clone, Copy)]
pub struct SlotProposal {
    pub room_id: Uuid,
    pub day: Weekday,
    pub window: TimeSlot,
}

pub struct ScheduleService;

impl ScheduleService {
    /// Persists one room/day/slot assignment for a course, with the
    /// recurrence flag fixed to weekly.
    ///
    /// The existence checks and the insert share one transaction, and an
    /// insert rejected by the no-overlap exclusion constraint surfaces as
    /// [`ScheduleError::SlotTaken`], so two callers racing for the same
    /// window cannot both succeed. Callers that lose rerun allocation with
    /// the stale slot excluded.
    pub async fn schedule_room(
        db: &DatabaseConnection,
        course_id: Uuid,
        proposal: SlotProposal,
    ) -> Result<room_schedule::Model, ScheduleError> {
        let txn = db.begin().await?;

        if course::Entity::find_by_id(course_id).one(&txn).await?.is_none() {
            return Err(ScheduleError::CourseNotFound(course_id));
        }

        if room::Entity::find_by_id(proposal.room_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(ScheduleError::RoomNotFound(proposal.room_id));
        }

        let created = room_schedule::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            room_id: Set(proposal.room_id),
            day_of_week: Set(proposal.day),
            time_start: Set(proposal.window.start),
            time_end: Set(proposal.window.end),
            recurring: Set(true),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            "scheduled course {course_id} in room {} on {} {}-{}",
            proposal.room_id,
            proposal.day,
            proposal.window.start.format("%H:%M"),
            proposal.window.end.format("%H:%M")
        );

        Ok(created)
    }

    /// Advisory conflict report for a proposed slot. Returns one
    /// human-readable message when the window is taken, or an empty list
    /// when clear. Does not block [`Self::schedule_room`].
    pub async fn check_for_conflicts(
        db: &DatabaseConnection,
        proposal: SlotProposal,
    ) -> Result<Vec<String>, ScheduleError> {
        let room = room::Entity::find_by_id(proposal.room_id)
            .one(db)
            .await?
            .ok_or(ScheduleError::RoomNotFound(proposal.room_id))?;

        let available =
            AvailabilityService::is_available(db, &room, proposal.day, proposal.window).await?;

        if available {
            Ok(vec![])
        } else {
            Ok(vec![format!(
                "Room {} is already booked on {} between {} and {}",
                room.name,
                proposal.day,
                proposal.window.start.format("%H:%M"),
                proposal.window.end.format("%H:%M")
            )])
        }
    }

    /// All bookings for one room, sorted by day of week (Monday first)
    /// then start time for display. The day column is text, so the sort
    /// runs over the domain ordering in application code.
    pub async fn schedules_for_room(
        db: &DatabaseConnection,
        room_id: Uuid,
    ) -> Result<Vec<room_schedule::Model>, ScheduleError> {
        if room::Entity::find_by_id(room_id).one(db).await?.is_none() {
            return Err(ScheduleError::RoomNotFound(room_id));
        }

        let mut rows = room_schedule::Entity::find()
            .filter(room_schedule::Column::RoomId.eq(room_id))
            .all(db)
            .await?;

        rows.sort_by_key(|row| (row.day_of_week, row.time_start));
        Ok(rows)
    }
}

#[cfg(test)]
mod test {
    use super::{ScheduleService, SlotProposal};
    use crate::entities::{course, room, room_schedule};
    use crate::error::ScheduleError;
    use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
    use models::{slot::TimeSlot, weekday::Weekday};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn epoch() -> NaiveDateTime {
        DateTime::<Utc>::UNIX_EPOCH.naive_utc()
    }

    fn hm(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn test_course() -> course::Model {
        course::Model {
            id: Uuid::new_v4(),
            name: "Algorithms".to_string(),
            teacher_id: Uuid::new_v4(),
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    fn proposal() -> SlotProposal {
        SlotProposal {
            room_id: Uuid::new_v4(),
            day: Weekday::Monday,
            window: TimeSlot::new(hm(9, 0), hm(10, 30)),
        }
    }

    #[tokio::test]
    async fn test_schedule_room_rejects_unknown_course() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<course::Model>::new()])
            .into_connection();

        let course_id = Uuid::new_v4();
        let err = ScheduleService::schedule_room(&db, course_id, proposal())
            .await
            .unwrap_err();

        assert!(matches!(err, ScheduleError::CourseNotFound(id) if id == course_id));
    }

    #[tokio::test]
    async fn test_schedule_room_rejects_unknown_room() {
        let course = test_course();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![course.clone()]])
            .append_query_results([Vec::<room::Model>::new()])
            .into_connection();

        let request = proposal();
        let err = ScheduleService::schedule_room(&db, course.id, request)
            .await
            .unwrap_err();

        assert!(matches!(err, ScheduleError::RoomNotFound(id) if id == request.room_id));
    }

    #[tokio::test]
    async fn test_schedules_for_room_sorts_by_day_then_start() {
        let room_id = Uuid::new_v4();
        let room = room::Model {
            id: room_id,
            name: "R1".to_string(),
            location: "Main building".to_string(),
            capacity: 30,
            is_active: true,
            created_at: epoch(),
            updated_at: epoch(),
        };

        let booking = |day: Weekday, start: NaiveTime, end: NaiveTime| room_schedule::Model {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            room_id,
            day_of_week: day,
            time_start: start,
            time_end: end,
            recurring: true,
            created_at: epoch(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![room]])
            .append_query_results([vec![
                booking(Weekday::Friday, hm(9, 0), hm(10, 30)),
                booking(Weekday::Monday, hm(13, 0), hm(14, 30)),
                booking(Weekday::Monday, hm(9, 0), hm(10, 30)),
            ]])
            .into_connection();

        let rows = ScheduleService::schedules_for_room(&db, room_id)
            .await
            .unwrap();

        let order: Vec<(Weekday, NaiveTime)> =
            rows.iter().map(|r| (r.day_of_week, r.time_start)).collect();
        assert_eq!(
            order,
            vec![
                (Weekday::Monday, hm(9, 0)),
                (Weekday::Monday, hm(13, 0)),
                (Weekday::Friday, hm(9, 0)),
            ]
        );
    }
}
