use axum::{
    extract::{Multipart, State},
    response::Redirect,
};

use crate::{
    error::Result,
    services::{roster, uploads},
    state::AppState,
};

use super::{redirect_error, redirect_success};

/// Multipart upload of a roster CSV. The file is kept in the upload
/// directory and then run through the importer.
pub async fn import(State(state): State<AppState>, mut multipart: Multipart) -> Result<Redirect> {
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().map(str::to_string);
            let bytes = field.bytes().await?;
            if let Some(filename) = filename {
                if !filename.is_empty() {
                    file = Some((filename, bytes.to_vec()));
                }
            }
        }
    }

    let Some((filename, bytes)) = file else {
        return Ok(redirect_error("/director", "CSV file required"));
    };
    if !uploads::is_csv(&filename) {
        return Ok(redirect_error("/director", "CSV file required"));
    }

    let stored = uploads::save_upload(&state.config.upload_dir, &filename, &bytes).await?;
    let path = state.config.upload_dir.join(&stored);
    let inserted = roster::import_students_from_csv(&state.db, &path).await?;
    tracing::info!(inserted, "Imported roster from {}", filename);

    Ok(redirect_success("/director", "Students imported"))
}
