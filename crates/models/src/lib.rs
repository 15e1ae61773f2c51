pub mod slot;
pub mod timetable;
pub mod weekday;
