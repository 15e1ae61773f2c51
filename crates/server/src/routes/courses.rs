use crate::dtos::course::CourseResponse;
use axum::{Json, extract::Path, http::StatusCode};
use database::{db::create_connection, services::course::CourseService};
use uuid::Uuid;

/// List a teacher's courses, sorted by name
#[utoipa::path(
    get,
    path = "/teachers/{id}/courses",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Courses retrieved successfully", body = [CourseResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_teacher_courses(
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CourseResponse>>, StatusCode> {
    let db = create_connection()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let courses = CourseService::for_teacher(&db, id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}
