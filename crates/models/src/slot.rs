use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Wall-clock `[start, end)` interval with no date or timezone component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Half-open overlap rule: `[a1,a2)` and `[b1,b2)` overlap iff
    /// `a1 < b2 && a2 > b1`. Touching boundaries do not count, so
    /// back-to-back bookings are allowed.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether no booking in `bookings` overlaps this interval
    pub fn is_clear_of(&self, bookings: &[TimeSlot]) -> bool {
        bookings.iter().all(|booked| !booked.overlaps(self))
    }
}

/// Parses a zero-padded 24-hour `HH:MM` wall-clock token. `HH:MM:SS` is
/// accepted too, matching the form times render back out as.
pub fn parse_wall_clock(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("Invalid wall-clock time: {s}"))
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).expect("literal wall-clock time")
}

/// The default catalog of five daily teaching slots, in allocation order.
/// Callers may substitute their own catalog; the allocator takes it as an
/// argument rather than reading a global.
pub fn default_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new(hm(9, 0), hm(10, 30)),
        TimeSlot::new(hm(10, 45), hm(12, 15)),
        TimeSlot::new(hm(13, 0), hm(14, 30)),
        TimeSlot::new(hm(14, 45), hm(16, 15)),
        TimeSlot::new(hm(16, 30), hm(18, 0)),
    ]
}

#[cfg(test)]
mod test {
    use crate::slot::{TimeSlot, default_slots, hm, parse_wall_clock};

    #[test]
    fn test_overlap_is_symmetric() {
        let a = TimeSlot::new(hm(9, 0), hm(10, 30));
        let b = TimeSlot::new(hm(10, 0), hm(11, 0));
        let c = TimeSlot::new(hm(12, 0), hm(13, 0));

        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        let morning = TimeSlot::new(hm(9, 0), hm(10, 30));
        let next = TimeSlot::new(hm(10, 30), hm(12, 0));

        assert!(!morning.overlaps(&next));
        assert!(next.is_clear_of(&[morning]));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        let all_day = TimeSlot::new(hm(9, 0), hm(18, 0));
        let inner = TimeSlot::new(hm(10, 0), hm(11, 0));

        assert!(inner.overlaps(&all_day));
        assert!(!inner.is_clear_of(&[all_day]));
    }

    #[test]
    fn test_is_clear_of_is_read_only() {
        let bookings = vec![TimeSlot::new(hm(9, 0), hm(10, 30))];
        let window = TimeSlot::new(hm(10, 0), hm(11, 0));

        let first = window.is_clear_of(&bookings);
        let second = window.is_clear_of(&bookings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_wall_clock() {
        assert_eq!(parse_wall_clock("09:00").unwrap(), hm(9, 0));
        assert_eq!(parse_wall_clock("16:30:00").unwrap(), hm(16, 30));
        assert!(parse_wall_clock("9am").is_err());
        assert!(parse_wall_clock("25:00").is_err());
    }

    #[test]
    fn test_default_catalog_order() {
        let slots = default_slots();

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0], TimeSlot::new(hm(9, 0), hm(10, 30)));
        assert_eq!(slots[4], TimeSlot::new(hm(16, 30), hm(18, 0)));

        // Consecutive slots leave a gap and never overlap
        for pair in slots.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}
