use axum::{
    extract::{Form, Path, State},
    response::Redirect,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use serde::Deserialize;

use crate::{
    db::entities::songs,
    error::{AppError, Result},
    state::AppState,
};

use super::{redirect_error, redirect_success};

#[derive(Debug, Deserialize)]
pub struct SongForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    performers: String,
    #[serde(default)]
    act: String,
}

fn parse_act(raw: &str, fallback: i32) -> i32 {
    raw.trim().parse().unwrap_or(fallback)
}

pub async fn add(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
    Form(form): Form<SongForm>,
) -> Result<Redirect> {
    let back = format!("/view/production/{production_id}/songs");

    let title = form.title.trim();
    if title.is_empty() {
        return Ok(redirect_error(&back, "Title required"));
    }

    songs::ActiveModel {
        production_id: Set(production_id),
        title: Set(title.to_string()),
        act: Set(parse_act(&form.act, 1)),
        performers_text: Set(form.performers.trim().to_string()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(redirect_success(&back, "Song added"))
}

/// Update title, performers, and act in place.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<SongForm>,
) -> Result<Redirect> {
    let song = songs::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Song {id} not found")))?;
    let back = format!("/view/production/{}/songs", song.production_id);
    let act = parse_act(&form.act, song.act);

    let mut active: songs::ActiveModel = song.into();
    let title = form.title.trim();
    if !title.is_empty() {
        active.title = Set(title.to_string());
    }
    active.performers_text = Set(form.performers.trim().to_string());
    active.act = Set(act);
    active.update(&state.db).await?;

    Ok(redirect_success(&back, "Updated"))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    let song = songs::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Song {id} not found")))?;
    let production_id = song.production_id;

    song.delete(&state.db).await?;

    Ok(redirect_success(
        &format!("/view/production/{production_id}/songs"),
        "Removed",
    ))
}
