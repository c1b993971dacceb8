//! Shared query logic at the data-store boundary.
//!
//! Everything here is generic over [`ConnectionTrait`] so callers can pass
//! either the pooled connection or a per-request transaction handle.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::db::entities::{
    crew_assignments, productions, role_assignments, roles, songs, students, team_members, thanks,
};
use crate::error::{AppError, Result};

/// Look up a role by its identifying triplet, creating it when absent.
///
/// Backed by the unique index on (production_id, name, is_group): a
/// concurrent insert of the same triplet is absorbed by the on-conflict
/// clause and resolved with a re-select, so exactly one row survives.
pub async fn find_or_create_role<C: ConnectionTrait>(
    conn: &C,
    production_id: i32,
    name: &str,
    is_group: bool,
) -> Result<roles::Model> {
    if let Some(role) = find_role(conn, production_id, name, is_group).await? {
        return Ok(role);
    }

    let insert = roles::Entity::insert(roles::ActiveModel {
        production_id: Set(production_id),
        name: Set(name.to_string()),
        is_group: Set(is_group),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::columns([
            roles::Column::ProductionId,
            roles::Column::Name,
            roles::Column::IsGroup,
        ])
        .do_nothing()
        .to_owned(),
    )
    .exec(conn)
    .await;

    match insert {
        Ok(res) => roles::Entity::find_by_id(res.last_insert_id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::Internal("role row missing after insert".to_string())),
        // Lost the race; the winner's row is the one we want.
        Err(DbErr::RecordNotInserted) => find_role(conn, production_id, name, is_group)
            .await?
            .ok_or_else(|| AppError::Internal("role row missing after conflict".to_string())),
        Err(e) => Err(e.into()),
    }
}

async fn find_role<C: ConnectionTrait>(
    conn: &C,
    production_id: i32,
    name: &str,
    is_group: bool,
) -> Result<Option<roles::Model>> {
    Ok(roles::Entity::find()
        .filter(roles::Column::ProductionId.eq(production_id))
        .filter(roles::Column::Name.eq(name))
        .filter(roles::Column::IsGroup.eq(is_group))
        .one(conn)
        .await?)
}

/// All productions, ordered by title for the listing pages.
pub async fn list_productions<C: ConnectionTrait>(conn: &C) -> Result<Vec<productions::Model>> {
    Ok(productions::Entity::find()
        .order_by_asc(productions::Column::Title)
        .all(conn)
        .await?)
}

/// A role together with the students assigned to it.
pub struct CastRole {
    pub role: roles::Model,
    pub members: Vec<(role_assignments::Model, students::Model)>,
}

/// The full read model behind every production page: cast with assigned
/// students, crew, creative team, songs, and acknowledgments.
pub struct ProductionBundle {
    pub production: productions::Model,
    /// Individual roles before grouped roles, alphabetical within each.
    pub cast: Vec<CastRole>,
    pub crew: Vec<(crew_assignments::Model, students::Model)>,
    pub team: Vec<team_members::Model>,
    /// Ordered by act, then title.
    pub songs: Vec<songs::Model>,
    pub thanks: Vec<thanks::Model>,
}

pub async fn load_production_bundle<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<ProductionBundle>> {
    let Some(production) = productions::Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let role_rows = roles::Entity::find()
        .filter(roles::Column::ProductionId.eq(id))
        .order_by_asc(roles::Column::IsGroup)
        .order_by_asc(roles::Column::Name)
        .all(conn)
        .await?;

    let role_ids: Vec<i32> = role_rows.iter().map(|r| r.id).collect();
    let assignment_rows = role_assignments::Entity::find()
        .filter(role_assignments::Column::RoleId.is_in(role_ids))
        .find_also_related(students::Entity)
        .all(conn)
        .await?;

    let mut cast: Vec<CastRole> = role_rows
        .into_iter()
        .map(|role| CastRole {
            role,
            members: Vec::new(),
        })
        .collect();
    for (assignment, student) in assignment_rows {
        let Some(student) = student else { continue };
        if let Some(entry) = cast.iter_mut().find(|c| c.role.id == assignment.role_id) {
            entry.members.push((assignment, student));
        }
    }

    let crew = crew_assignments::Entity::find()
        .filter(crew_assignments::Column::ProductionId.eq(id))
        .find_also_related(students::Entity)
        .all(conn)
        .await?
        .into_iter()
        .filter_map(|(assignment, student)| student.map(|s| (assignment, s)))
        .collect();

    let team = team_members::Entity::find()
        .filter(team_members::Column::ProductionId.eq(id))
        .all(conn)
        .await?;

    let songs = songs::Entity::find()
        .filter(songs::Column::ProductionId.eq(id))
        .order_by_asc(songs::Column::Act)
        .order_by_asc(songs::Column::Title)
        .all(conn)
        .await?;

    let thanks = thanks::Entity::find()
        .filter(thanks::Column::ProductionId.eq(id))
        .all(conn)
        .await?;

    Ok(Some(ProductionBundle {
        production,
        cast,
        crew,
        team,
        songs,
        thanks,
    }))
}
