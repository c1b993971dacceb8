use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::{
    db::repositories,
    error::{AppError, Result},
    state::AppState,
    templates,
};

/// Landing page with viewer and director entry points.
pub async fn home() -> Html<String> {
    Html(templates::home_page().into_string())
}

/// Read-only production listing, ordered by title.
pub async fn productions(State(state): State<AppState>) -> Result<Html<String>> {
    let productions = repositories::list_productions(&state.db).await?;
    Ok(Html(templates::viewer_list_page(&productions).into_string()))
}

/// Read-only program page for one production.
pub async fn production(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let bundle = repositories::load_production_bundle(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Production {id} not found")))?;
    Ok(Html(templates::viewer_production_page(&bundle).into_string()))
}
