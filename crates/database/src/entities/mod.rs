pub mod course;
pub mod room;
pub mod room_schedule;
