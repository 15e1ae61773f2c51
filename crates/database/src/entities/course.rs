use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub teacher_id: Uuid,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_schedule::Entity")]
    RoomSchedules,
}

impl Related<super::room_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomSchedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
