use axum::{
    extract::{Form, Path, State},
    response::Redirect,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use serde::Deserialize;

use crate::{
    db::entities::thanks,
    error::{AppError, Result},
    state::AppState,
};

use super::{redirect_error, redirect_success};

#[derive(Debug, Deserialize)]
pub struct AddThanksForm {
    #[serde(default)]
    text: String,
}

pub async fn add(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
    Form(form): Form<AddThanksForm>,
) -> Result<Redirect> {
    let back = format!("/view/production/{production_id}");

    let text = form.text.trim();
    if text.is_empty() {
        return Ok(redirect_error(&back, "Text required"));
    }

    thanks::ActiveModel {
        production_id: Set(production_id),
        text: Set(text.to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(redirect_success(&back, "Added"))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    let entry = thanks::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Thanks entry {id} not found")))?;
    let production_id = entry.production_id;

    entry.delete(&state.db).await?;

    Ok(redirect_success(
        &format!("/view/production/{production_id}"),
        "Removed",
    ))
}
