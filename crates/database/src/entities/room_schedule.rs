use models::weekday::Weekday;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One recurring weekly booking of a room for a course.
///
/// `day_of_week` is stored as lowercase text; `time_start`/`time_end` are
/// wall-clock times with no date or timezone. The no-overlap invariant per
/// (room, day) is enforced by a database exclusion constraint, not here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub room_id: Uuid,
    pub day_of_week: Weekday,
    pub time_start: Time,
    pub time_end: Time,
    pub recurring: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
