use database::entities::course;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub teacher_id: String,
}

impl From<course::Model> for CourseResponse {
    fn from(course: course::Model) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name,
            teacher_id: course.teacher_id.to_string(),
        }
    }
}
