use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An adult contributor (director, choreographer, ...) — not a student.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub production_id: i32,
    pub name: String,
    pub position: String,
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::productions::Entity",
        from = "Column::ProductionId",
        to = "super::productions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Productions,
}

impl Related<super::productions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
