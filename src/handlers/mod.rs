pub mod viewer;
pub mod director;
pub mod productions;
pub mod cast;
pub mod crew;
pub mod songs;
pub mod team;
pub mod thanks;
pub mod roster;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::templates::{Flash, FlashKind};

pub fn routes(upload_dir: &Path) -> Router<AppState> {
    Router::new()
        // Public pages
        .route("/", get(viewer::home))
        .route("/viewer", get(viewer::productions))
        .route("/viewer/production/:id", get(viewer::production))

        // Director pages
        .route("/director", get(director::home))
        .route("/view/production/:id", get(director::production))
        .route("/view/production/:id/cast", get(director::cast))
        .route("/view/production/:id/crew", get(director::crew))
        .route("/view/production/:id/songs", get(director::songs))

        // Production mutations
        .route("/edit/create_production", post(productions::create))
        .route(
            "/edit/production/:id/edit",
            get(director::edit_form).post(productions::update),
        )
        .route("/edit/production/:id/delete", post(productions::delete))

        // Cast
        .route("/edit/production/:id/cast", post(cast::add))
        .route("/edit/role_assignment/:id/delete", post(cast::remove))

        // Crew
        .route("/edit/production/:id/crew", post(crew::add))
        .route("/edit/crew/:id/delete", post(crew::remove))

        // Songs
        .route("/edit/production/:id/songs", post(songs::add))
        .route("/edit/song/:id/edit", post(songs::edit))
        .route("/edit/song/:id/delete", post(songs::remove))

        // Creative team
        .route("/edit/production/:id/team", post(team::add))
        .route("/edit/team/:id/delete", post(team::remove))

        // Thanks
        .route("/edit/production/:id/thanks", post(thanks::add))
        .route("/edit/thanks/:id/delete", post(thanks::remove))

        // Roster import
        .route("/edit/import_students", post(roster::import))

        // Uploaded cover art and roster files
        .nest_service("/uploads", ServeDir::new(upload_dir))
}

/// Transient status carried across a redirect in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
    pub kind: Option<String>,
}

impl FlashQuery {
    pub fn into_flash(self) -> Option<Flash> {
        let message = self.flash?;
        let kind = match self.kind.as_deref() {
            Some("error") => FlashKind::Error,
            _ => FlashKind::Success,
        };
        Some(Flash { kind, message })
    }
}

pub(crate) fn redirect_success(path: &str, message: &str) -> Redirect {
    flash_redirect(path, "success", message)
}

pub(crate) fn redirect_error(path: &str, message: &str) -> Redirect {
    flash_redirect(path, "error", message)
}

fn flash_redirect(path: &str, kind: &str, message: &str) -> Redirect {
    Redirect::to(&format!(
        "{}?flash={}&kind={}",
        path,
        urlencoding::encode(message),
        kind
    ))
}
