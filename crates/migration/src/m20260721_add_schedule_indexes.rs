use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The availability predicate filters on (room_id, day_of_week)
        manager
            .create_index(
                Index::create()
                    .name("idx_room_schedules_room_id_day_of_week")
                    .table(RoomSchedules::Table)
                    .col(RoomSchedules::RoomId)
                    .col(RoomSchedules::DayOfWeek)
                    .to_owned(),
            )
            .await?;

        // Index on room_schedules.course_id for cascade deletes and joins
        manager
            .create_index(
                Index::create()
                    .name("idx_room_schedules_course_id")
                    .table(RoomSchedules::Table)
                    .col(RoomSchedules::CourseId)
                    .to_owned(),
            )
            .await?;

        // The allocator only ever reads active rooms
        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_is_active")
                    .table(Rooms::Table)
                    .col(Rooms::IsActive)
                    .to_owned(),
            )
            .await?;

        // Index on courses.teacher_id for the teacher course listing
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_teacher_id")
                    .table(Courses::Table)
                    .col(Courses::TeacherId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_courses_teacher_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_rooms_is_active").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_room_schedules_course_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_room_schedules_room_id_day_of_week")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum RoomSchedules {
    Table,
    CourseId,
    RoomId,
    DayOfWeek,
}

#[derive(Iden)]
enum Rooms {
    Table,
    IsActive,
}

#[derive(Iden)]
enum Courses {
    Table,
    TeacherId,
}
