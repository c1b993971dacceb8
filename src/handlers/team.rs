use axum::{
    extract::{Form, Path, State},
    response::Redirect,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use serde::Deserialize;

use crate::{
    db::entities::team_members,
    error::{AppError, Result},
    state::AppState,
};

use super::{redirect_error, redirect_success};

#[derive(Debug, Deserialize)]
pub struct AddTeamForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    position: String,
    #[serde(default)]
    notes: String,
}

pub async fn add(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
    Form(form): Form<AddTeamForm>,
) -> Result<Redirect> {
    let back = format!("/view/production/{production_id}");

    let name = form.name.trim();
    let position = form.position.trim();
    if name.is_empty() || position.is_empty() {
        return Ok(redirect_error(&back, "Name and position required"));
    }

    team_members::ActiveModel {
        production_id: Set(production_id),
        name: Set(name.to_string()),
        position: Set(position.to_string()),
        notes: Set(form.notes.trim().to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(redirect_success(&back, "Added"))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    let member = team_members::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team member {id} not found")))?;
    let production_id = member.production_id;

    member.delete(&state.db).await?;

    Ok(redirect_success(
        &format!("/view/production/{production_id}"),
        "Removed",
    ))
}
