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
                    .table(Thanks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Thanks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Thanks::ProductionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Thanks::Text)
                            .text()
                            .not_null(),
                    )
                    // Same cascade as every other child table, so deleting a
                    // production takes its acknowledgments with it.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_thanks_production_id")
                            .from(Thanks::Table, Thanks::ProductionId)
                            .to(Productions::Table, Productions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_thanks_production_id")
                    .table(Thanks::Table)
                    .col(Thanks::ProductionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Thanks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Thanks {
    Table,
    Id,
    ProductionId,
    Text,
}
