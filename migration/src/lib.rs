pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_students_table;
mod m20250901_000002_create_productions_table;
mod m20250901_000003_create_roles_table;
mod m20250901_000004_create_role_assignments_table;
mod m20250901_000005_create_crew_assignments_table;
mod m20250901_000006_create_team_members_table;
mod m20250901_000007_create_songs_table;
mod m20250901_000008_create_thanks_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_students_table::Migration),
            Box::new(m20250901_000002_create_productions_table::Migration),
            Box::new(m20250901_000003_create_roles_table::Migration),
            Box::new(m20250901_000004_create_role_assignments_table::Migration),
            Box::new(m20250901_000005_create_crew_assignments_table::Migration),
            Box::new(m20250901_000006_create_team_members_table::Migration),
            Box::new(m20250901_000007_create_songs_table::Migration),
            Box::new(m20250901_000008_create_thanks_table::Migration),
        ]
    }
}
