use crate::routes::{courses, health, rooms, root, schedules, timetable};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        rooms::get_rooms,
        rooms::get_room_schedules,
        rooms::get_room_availability,
        timetable::generate_timetable,
        schedules::create_schedule,
        schedules::check_conflicts,
        courses::get_teacher_courses,
    ),
    tags(
        (name = "Rooms", description = "Room listing and availability endpoints"),
        (name = "Timetable", description = "First-fit timetable allocation endpoints"),
        (name = "Schedules", description = "Schedule persistence and conflict endpoints"),
        (name = "Courses", description = "Course listing endpoints"),
    ),
    info(
        title = "Room Scheduling API",
        version = "1.0.0",
        description = "Room and timetable scheduling API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
