use sea_orm_migration::prelude::*;

use super::m20250901_000001_create_students_table::Students;
use super::m20250901_000002_create_productions_table::Productions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CrewAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrewAssignments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CrewAssignments::ProductionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CrewAssignments::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CrewAssignments::Responsibility)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crew_assignments_production_id")
                            .from(CrewAssignments::Table, CrewAssignments::ProductionId)
                            .to(Productions::Table, Productions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crew_assignments_student_id")
                            .from(CrewAssignments::Table, CrewAssignments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_crew_assignments_production_id")
                    .table(CrewAssignments::Table)
                    .col(CrewAssignments::ProductionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrewAssignments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CrewAssignments {
    Table,
    Id,
    ProductionId,
    StudentId,
    Responsibility,
}
