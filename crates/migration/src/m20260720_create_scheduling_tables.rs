use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::Name).string().not_null())
                    .col(ColumnDef::new(Rooms::Location).string().not_null())
                    .col(ColumnDef::new(Rooms::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Rooms::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Rooms::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::TeacherId).uuid().not_null())
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create room_schedules table
        manager
            .create_table(
                Table::create()
                    .table(RoomSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomSchedules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomSchedules::CourseId).uuid().not_null())
                    .col(ColumnDef::new(RoomSchedules::RoomId).uuid().not_null())
                    .col(ColumnDef::new(RoomSchedules::DayOfWeek).text().not_null())
                    .col(ColumnDef::new(RoomSchedules::TimeStart).time().not_null())
                    .col(ColumnDef::new(RoomSchedules::TimeEnd).time().not_null())
                    .col(
                        ColumnDef::new(RoomSchedules::Recurring)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(RoomSchedules::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-room_schedules-course_id")
                            .from(RoomSchedules::Table, RoomSchedules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-room_schedules-room_id")
                            .from(RoomSchedules::Table, RoomSchedules::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomSchedules::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    Name,
    Location,
    Capacity,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
    TeacherId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum RoomSchedules {
    Table,
    Id,
    CourseId,
    RoomId,
    DayOfWeek,
    TimeStart,
    TimeEnd,
    Recurring,
    CreatedAt,
}
