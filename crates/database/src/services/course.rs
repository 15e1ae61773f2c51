use crate::entities::course;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct CourseService;

impl CourseService {
    pub async fn get<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(course_id).one(db).await
    }

    /// Courses taught by one teacher, sorted by name for display
    pub async fn for_teacher<C: ConnectionTrait>(
        db: &C,
        teacher_id: Uuid,
    ) -> Result<Vec<course::Model>, DbErr> {
        course::Entity::find()
            .filter(course::Column::TeacherId.eq(teacher_id))
            .order_by_asc(course::Column::Name)
            .all(db)
            .await
    }
}
