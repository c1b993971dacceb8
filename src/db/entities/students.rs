use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub sex: String,
    pub year: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_assignments::Entity")]
    RoleAssignments,
    #[sea_orm(has_many = "super::crew_assignments::Entity")]
    CrewAssignments,
}

impl Related<super::role_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleAssignments.def()
    }
}

impl Related<super::crew_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrewAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
