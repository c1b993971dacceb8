use axum::{
    extract::{Form, Path, State},
    response::Redirect,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use serde::Deserialize;

use crate::{
    db::entities::crew_assignments,
    error::{AppError, Result},
    state::AppState,
};

use super::{redirect_error, redirect_success};

#[derive(Debug, Deserialize)]
pub struct AddCrewForm {
    #[serde(default)]
    student_id: String,
    #[serde(default)]
    responsibility: String,
}

pub async fn add(
    State(state): State<AppState>,
    Path(production_id): Path<i32>,
    Form(form): Form<AddCrewForm>,
) -> Result<Redirect> {
    let back = format!("/view/production/{production_id}/crew");

    let Ok(student_id) = form.student_id.trim().parse::<i32>() else {
        return Ok(redirect_error(&back, "Student required"));
    };
    let responsibility = match form.responsibility.trim() {
        "" => "Crew".to_string(),
        text => text.to_string(),
    };

    crew_assignments::ActiveModel {
        production_id: Set(production_id),
        student_id: Set(student_id),
        responsibility: Set(responsibility),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(redirect_success(&back, "Crew added"))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    let assignment = crew_assignments::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crew assignment {id} not found")))?;
    let production_id = assignment.production_id;

    assignment.delete(&state.db).await?;

    Ok(redirect_success(
        &format!("/view/production/{production_id}/crew"),
        "Removed",
    ))
}
