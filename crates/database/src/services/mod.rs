pub mod availability;
pub mod course;
pub mod room;
pub mod schedule;
pub mod timetable;
