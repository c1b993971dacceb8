use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Root aggregate: deleting a production cascades to every owned child
/// table (roles, songs, team, crew, thanks).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "productions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    /// Relative path under the upload directory, e.g. `/uploads/poster.png`.
    pub cover_path: Option<String>,
    pub dates_text: String,
    pub location: String,
    pub price: String,
    pub copyright: String,
    pub notes: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roles::Entity")]
    Roles,
    #[sea_orm(has_many = "super::songs::Entity")]
    Songs,
    #[sea_orm(has_many = "super::team_members::Entity")]
    TeamMembers,
    #[sea_orm(has_many = "super::crew_assignments::Entity")]
    CrewAssignments,
    #[sea_orm(has_many = "super::thanks::Entity")]
    Thanks,
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}

impl Related<super::songs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Songs.def()
    }
}

impl Related<super::team_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMembers.def()
    }
}

impl Related<super::crew_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrewAssignments.def()
    }
}

impl Related<super::thanks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Thanks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
