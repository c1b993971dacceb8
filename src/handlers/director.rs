use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use sea_orm::EntityTrait;

use crate::{
    db::{entities::productions, entities::students, repositories},
    error::{AppError, Result},
    services::roster,
    state::AppState,
    templates,
};

use super::FlashQuery;

/// Director home: production list, create form, roster import form.
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let productions = repositories::list_productions(&state.db).await?;
    Ok(Html(
        templates::director_page(&productions, query.into_flash()).into_string(),
    ))
}

/// Editor view of one production: program plus team/thanks management.
pub async fn production(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let bundle = load(&state, id).await?;
    Ok(Html(
        templates::production_page(&bundle, query.into_flash()).into_string(),
    ))
}

/// Cast editor: roles with per-assignment removal, plus an add form.
pub async fn cast(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let bundle = load(&state, id).await?;
    let students = students_by_last_name(&state).await?;
    Ok(Html(
        templates::cast_page(&bundle, &students, query.into_flash()).into_string(),
    ))
}

/// Crew editor.
pub async fn crew(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let bundle = load(&state, id).await?;
    let students = students_by_last_name(&state).await?;
    Ok(Html(
        templates::crew_page(&bundle, &students, query.into_flash()).into_string(),
    ))
}

/// Song editor with inline per-song edit forms.
pub async fn songs(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let bundle = load(&state, id).await?;
    Ok(Html(
        templates::songs_page(&bundle, query.into_flash()).into_string(),
    ))
}

/// Pre-filled production edit form.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let production = productions::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Production {id} not found")))?;
    Ok(Html(
        templates::production_edit_page(&production, query.into_flash()).into_string(),
    ))
}

async fn load(state: &AppState, id: i32) -> Result<repositories::ProductionBundle> {
    repositories::load_production_bundle(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Production {id} not found")))
}

/// Pick-list ordering: last name first, full name as tiebreaker.
async fn students_by_last_name(state: &AppState) -> Result<Vec<students::Model>> {
    let mut all = students::Entity::find().all(&state.db).await?;
    all.sort_by(|a, b| {
        roster::last_name(&a.name)
            .cmp(roster::last_name(&b.name))
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(all)
}
