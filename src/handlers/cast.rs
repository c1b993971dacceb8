use axum::{
    extract::{Form, Path, State},
    response::Redirect,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set, TransactionTrait};
use serde::Deserialize;

use crate::{
    db::{
        entities::{role_assignments, roles},
        repositories,
    },
    error::{AppError, Result},
    state::AppState,
};

use super::{redirect_error, redirect_success};

#[derive(Debug, Deserialize)]
pub struct AddCastForm {
    #[serde(default)]
    role: String,
    #[serde(default)]
    student_id: String,
    /// Checkbox: present ("on") when ticked, absent otherwise.
    is_group: Option<String>,
}

/// Cast a student: find-or-create the role, then link the assignment.
/// Both writes commit together or not at all.
pub async fn add(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
    Form(form): Form<AddCastForm>,
) -> Result<Redirect> {
    let back = format!("/view/production/{production_id}/cast");

    let role_name = form.role.trim();
    if role_name.is_empty() {
        return Ok(redirect_error(&back, "Role and student required"));
    }
    let Ok(student_id) = form.student_id.trim().parse::<i32>() else {
        return Ok(redirect_error(&back, "Role and student required"));
    };
    let is_group = form.is_group.is_some();

    let txn = state.db.begin().await?;
    let role = repositories::find_or_create_role(&txn, production_id, role_name, is_group).await?;
    role_assignments::ActiveModel {
        role_id: Set(role.id),
        student_id: Set(student_id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    Ok(redirect_success(&back, "Assigned"))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    let assignment = role_assignments::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assignment {id} not found")))?;
    let role = assignment
        .find_related(roles::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role for assignment {id} not found")))?;

    assignment.delete(&state.db).await?;

    Ok(redirect_success(
        &format!("/view/production/{}/cast", role.production_id),
        "Removed",
    ))
}
