pub mod course;
pub mod room;
pub mod timetable;
