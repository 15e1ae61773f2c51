pub use sea_orm_migration::prelude::*;

mod m20260720_create_scheduling_tables;
mod m20260721_add_schedule_indexes;
mod m20260722_add_no_overlap_constraint;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260720_create_scheduling_tables::Migration),
            Box::new(m20260721_add_schedule_indexes::Migration),
            Box::new(m20260722_add_no_overlap_constraint::Migration),
        ]
    }
}
