use crate::entities::room;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

pub struct RoomService;

impl RoomService {
    pub async fn get<C: ConnectionTrait>(
        db: &C,
        room_id: Uuid,
    ) -> Result<Option<room::Model>, DbErr> {
        room::Entity::find_by_id(room_id).one(db).await
    }

    /// Every room, active or not, sorted by name for display
    pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<room::Model>, DbErr> {
        room::Entity::find()
            .order_by_asc(room::Column::Name)
            .order_by_asc(room::Column::Id)
            .all(db)
            .await
    }

    /// Active rooms in the fixed iteration order the allocator relies on:
    /// ascending name, id as tiebreaker. The order is part of the
    /// first-fit contract, so it is explicit here rather than left to the
    /// store's default return order.
    pub async fn active_ordered<C: ConnectionTrait>(db: &C) -> Result<Vec<room::Model>, DbErr> {
        room::Entity::find()
            .filter(room::Column::IsActive.eq(true))
            .order_by_asc(room::Column::Name)
            .order_by_asc(room::Column::Id)
            .all(db)
            .await
    }
}
