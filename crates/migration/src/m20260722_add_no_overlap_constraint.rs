use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // btree_gist lets the gist exclusion constraint mix equality columns
        // (room_id, day_of_week) with the range overlap operator
        manager
            .get_connection()
            .execute_unprepared("CREATE EXTENSION IF NOT EXISTS btree_gist;")
            .await?;

        // Postgres ships no range type over time-of-day, so define one
        manager
            .get_connection()
            .execute_unprepared("CREATE TYPE timerange AS RANGE (subtype = time);")
            .await?;

        // Two bookings for the same room and day with overlapping half-open
        // [time_start, time_end) ranges can never both commit; the losing
        // insert fails with this constraint's name in the error
        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE room_schedules
                ADD CONSTRAINT no_overlapping_room_schedules
                EXCLUDE USING gist (
                    room_id WITH =,
                    day_of_week WITH =,
                    timerange(time_start, time_end) WITH &&
                );",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE room_schedules
                DROP CONSTRAINT IF EXISTS no_overlapping_room_schedules;",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS timerange;")
            .await?;

        Ok(())
    }
}
