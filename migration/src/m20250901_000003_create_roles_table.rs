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
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Roles::ProductionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Roles::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Roles::IsGroup)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Roles::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_production_id")
                            .from(Roles::Table, Roles::ProductionId)
                            .to(Productions::Table, Productions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_roles_production_id")
                    .table(Roles::Table)
                    .col(Roles::ProductionId)
                    .to_owned(),
            )
            .await?;

        // Casting looks roles up by (production, name, is_group) and creates
        // them on demand; the unique index makes that find-or-create safe
        // under concurrent submissions.
        manager
            .create_index(
                Index::create()
                    .name("uq_roles_production_name_group")
                    .table(Roles::Table)
                    .col(Roles::ProductionId)
                    .col(Roles::Name)
                    .col(Roles::IsGroup)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Roles {
    Table,
    Id,
    ProductionId,
    Name,
    IsGroup,
    OrderIndex,
}
