use crate::entities::{room, room_schedule};
use log::debug;
use models::{slot::TimeSlot, weekday::Weekday};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct AvailabilityService;

impl AvailabilityService {
    /// Whether `room` has no booking overlapping `window` on `day`.
    ///
    /// Absence of data is not an error: a room with no schedule rows for
    /// the day is available. Touching boundaries do not count as overlap,
    /// so back-to-back bookings are allowed. Read-only; callers that need
    /// the answer to stay true must hold the database-level no-overlap
    /// constraint responsible, not this check.
    pub async fn is_available<C: ConnectionTrait>(
        db: &C,
        room: &room::Model,
        day: Weekday,
        window: TimeSlot,
    ) -> Result<bool, DbErr> {
        debug!(
            "availability check: room={} day={day} window={}-{}",
            room.id, window.start, window.end
        );

        let bookings = Self::booked_slots(db, room.id, day).await?;
        let overlapping = bookings
            .iter()
            .filter(|booked| booked.overlaps(&window))
            .count();

        debug!(
            "availability result: room={} available={} overlapping={overlapping}",
            room.id,
            overlapping == 0
        );

        Ok(overlapping == 0)
    }

    /// All booked intervals for one room on one day
    pub async fn booked_slots<C: ConnectionTrait>(
        db: &C,
        room_id: Uuid,
        day: Weekday,
    ) -> Result<Vec<TimeSlot>, DbErr> {
        let rows = room_schedule::Entity::find()
            .filter(room_schedule::Column::RoomId.eq(room_id))
            .filter(room_schedule::Column::DayOfWeek.eq(day))
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| TimeSlot::new(row.time_start, row.time_end))
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::AvailabilityService;
    use crate::entities::{room, room_schedule};
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

    fn test_room() -> room::Model {
        room::Model {
            id: Uuid::new_v4(),
            name: "R1".to_string(),
            location: "Main building".to_string(),
            capacity: 30,
            is_active: true,
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    fn booking(room_id: Uuid, day: Weekday, start: NaiveTime, end: NaiveTime) -> room_schedule::Model {
        room_schedule::Model {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            room_id,
            day_of_week: day,
            time_start: start,
            time_end: end,
            recurring: true,
            created_at: epoch(),
        }
    }

    #[tokio::test]
    async fn test_room_with_no_bookings_is_available() {
        let room = test_room();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<room_schedule::Model>::new()])
            .into_connection();

        let available = AvailabilityService::is_available(
            &db,
            &room,
            Weekday::Monday,
            TimeSlot::new(hm(9, 0), hm(10, 30)),
        )
        .await
        .unwrap();

        assert!(available);
    }

    #[tokio::test]
    async fn test_overlapping_booking_blocks_the_window() {
        let room = test_room();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![booking(
                room.id,
                Weekday::Monday,
                hm(9, 0),
                hm(18, 0),
            )]])
            .into_connection();

        let available = AvailabilityService::is_available(
            &db,
            &room,
            Weekday::Monday,
            TimeSlot::new(hm(10, 0), hm(11, 0)),
        )
        .await
        .unwrap();

        assert!(!available);
    }

    #[tokio::test]
    async fn test_back_to_back_booking_leaves_window_available() {
        let room = test_room();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![booking(
                room.id,
                Weekday::Monday,
                hm(9, 0),
                hm(10, 30),
            )]])
            .into_connection();

        let available = AvailabilityService::is_available(
            &db,
            &room,
            Weekday::Monday,
            TimeSlot::new(hm(10, 30), hm(12, 0)),
        )
        .await
        .unwrap();

        assert!(available);
    }
}
