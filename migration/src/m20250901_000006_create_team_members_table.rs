use sea_orm_migration::prelude::*;

use super::m20250901_000002_create_productions_table::Productions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamMembers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeamMembers::ProductionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeamMembers::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeamMembers::Position)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeamMembers::Notes)
                            .string_len(256)
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_members_production_id")
                            .from(TeamMembers::Table, TeamMembers::ProductionId)
                            .to(Productions::Table, Productions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_members_production_id")
                    .table(TeamMembers::Table)
                    .col(TeamMembers::ProductionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMembers {
    Table,
    Id,
    ProductionId,
    Name,
    Position,
    Notes,
}
