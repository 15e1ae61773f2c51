use crate::slot::TimeSlot;

/// Message reported for a day with no free (room, slot) combination
pub const NO_ROOMS_AVAILABLE: &str = "No available rooms for this day";

/// Greedy first-fit over the candidate catalog.
///
/// Slots are tried in catalog order and rooms in the order their booking
/// lists are given; the first pair where the slot is clear of every
/// existing booking wins. Returns the index into `bookings_per_room`
/// together with the chosen slot, or `None` when every combination is
/// taken. No backtracking and no attempt at balance: the room and slot
/// counts are small enough that first-fit is both cheap and good enough.
pub fn first_fit(
    bookings_per_room: &[Vec<TimeSlot>],
    catalog: &[TimeSlot],
) -> Option<(usize, TimeSlot)> {
    for slot in catalog {
        for (room_idx, bookings) in bookings_per_room.iter().enumerate() {
            if slot.is_clear_of(bookings) {
                return Some((room_idx, *slot));
            }
        }
    }

    None
}

#[cfg(test)]
mod test {
    use crate::slot::{TimeSlot, default_slots};
    use crate::timetable::first_fit;
    use chrono::NaiveTime;

    fn slot(start: (u32, u32), end: (u32, u32)) -> TimeSlot {
        TimeSlot::new(
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    #[test]
    fn test_no_rooms_yields_no_slot() {
        assert_eq!(first_fit(&[], &default_slots()), None);
    }

    #[test]
    fn test_empty_catalog_yields_no_slot() {
        assert_eq!(first_fit(&[vec![]], &[]), None);
    }

    #[test]
    fn test_first_fit_skips_booked_room() {
        // Room 0 holds the first slot, room 1 is free: the first slot must
        // land in room 1 rather than moving on to the second slot
        let catalog = default_slots();
        let rooms = vec![vec![catalog[0]], vec![]];

        assert_eq!(first_fit(&rooms, &catalog), Some((1, catalog[0])));
    }

    #[test]
    fn test_single_room_moves_to_next_slot() {
        // Booked 09:00-10:30, so the search should land on 10:45-12:15 in
        // the same room
        let catalog = default_slots();
        let rooms = vec![vec![slot((9, 0), (10, 30))]];

        assert_eq!(first_fit(&rooms, &catalog), Some((0, catalog[1])));
    }

    #[test]
    fn test_fully_booked_day_yields_no_slot() {
        let catalog = default_slots();
        let rooms = vec![catalog.clone(), catalog.clone()];

        assert_eq!(first_fit(&rooms, &catalog), None);
    }

    #[test]
    fn test_all_day_booking_blocks_every_slot() {
        let catalog = default_slots();
        let rooms = vec![vec![slot((9, 0), (18, 0))]];

        assert_eq!(first_fit(&rooms, &catalog), None);
    }
}
