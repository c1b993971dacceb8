use axum::{
    extract::{Multipart, Path, State},
    response::Redirect,
};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

use crate::{
    db::entities::productions,
    error::{AppError, Result},
    services::uploads,
    state::AppState,
};

use super::{redirect_error, redirect_success};

#[derive(Debug, Default)]
struct ProductionForm {
    title: String,
    subtitle: String,
    dates: String,
    location: String,
    price: String,
    copyright: String,
    notes: String,
    cover: Option<(String, Vec<u8>)>,
}

async fn read_form(mut multipart: Multipart) -> Result<ProductionForm> {
    let mut form = ProductionForm::default();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "cover" => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                if let Some(filename) = filename {
                    // Browsers send an empty part when no file was chosen.
                    if !filename.is_empty() && !bytes.is_empty() {
                        form.cover = Some((filename, bytes.to_vec()));
                    }
                }
            }
            "title" => form.title = field.text().await?.trim().to_string(),
            "subtitle" => form.subtitle = field.text().await?.trim().to_string(),
            "dates" => form.dates = field.text().await?.trim().to_string(),
            "location" => form.location = field.text().await?.trim().to_string(),
            "price" => form.price = field.text().await?.trim().to_string(),
            "copyright" => form.copyright = field.text().await?.trim().to_string(),
            "notes" => form.notes = field.text().await?.trim().to_string(),
            _ => {}
        }
    }
    Ok(form)
}

/// Store an accepted cover upload and return its public path. Files with a
/// disallowed extension are dropped without failing the submission.
async fn save_cover(state: &AppState, cover: Option<&(String, Vec<u8>)>) -> Result<Option<String>> {
    let Some((filename, bytes)) = cover else {
        return Ok(None);
    };
    if !uploads::is_allowed_image(filename) {
        tracing::debug!("Rejected cover upload with disallowed extension: {}", filename);
        return Ok(None);
    }
    let stored = uploads::save_upload(&state.config.upload_dir, filename, bytes).await?;
    Ok(Some(format!("/uploads/{stored}")))
}

pub async fn create(State(state): State<AppState>, multipart: Multipart) -> Result<Redirect> {
    let form = read_form(multipart).await?;
    if form.title.is_empty() {
        return Ok(redirect_error("/director", "Title required"));
    }

    let cover_path = save_cover(&state, form.cover.as_ref()).await?;

    let now = chrono::Utc::now();
    let production = productions::ActiveModel {
        title: Set(form.title),
        subtitle: Set(form.subtitle),
        cover_path: Set(cover_path),
        dates_text: Set(form.dates),
        location: Set(form.location),
        price: Set(form.price),
        copyright: Set(form.copyright),
        notes: Set(form.notes),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(redirect_success(
        &format!("/view/production/{}", production.id),
        "Production created",
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Redirect> {
    let production = productions::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Production {id} not found")))?;

    let form = read_form(multipart).await?;
    let cover_path = save_cover(&state, form.cover.as_ref()).await?;

    let mut active: productions::ActiveModel = production.into();
    // A blanked-out title keeps the stored one; title stays required.
    if !form.title.is_empty() {
        active.title = Set(form.title);
    }
    active.subtitle = Set(form.subtitle);
    active.dates_text = Set(form.dates);
    active.location = Set(form.location);
    active.price = Set(form.price);
    active.copyright = Set(form.copyright);
    active.notes = Set(form.notes);
    if let Some(path) = cover_path {
        active.cover_path = Set(Some(path));
    }
    active.updated_at = Set(chrono::Utc::now().into());
    active.update(&state.db).await?;

    Ok(redirect_success(
        &format!("/view/production/{id}"),
        "Production updated",
    ))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    let production = productions::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Production {id} not found")))?;

    // Cascades to roles, role assignments, crew, team, songs, and thanks.
    production.delete(&state.db).await?;

    Ok(redirect_success("/director", "Production deleted"))
}
