use maud::{html, Markup};

use crate::db::entities::{productions, students};

pub enum FlashKind {
    Success,
    Error,
}

/// Transient status banner shown once after a redirect.
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

pub fn flash_banner(flash: &Flash) -> Markup {
    let class = match flash.kind {
        FlashKind::Success => "flash flash-success",
        FlashKind::Error => "flash flash-error",
    };
    html! {
        div class=(class) { (flash.message) }
    }
}

pub fn production_card(production: &productions::Model, href: &str) -> Markup {
    html! {
        a class="card" href=(href) {
            @if let Some(cover) = &production.cover_path {
                img src=(cover) alt=(production.title);
            }
            h3 { (production.title) }
            @if !production.subtitle.is_empty() {
                p class="muted" { (production.subtitle) }
            }
            @if !production.dates_text.is_empty() {
                p class="muted" { (production.dates_text) }
            }
        }
    }
}

/// Student pick-list; callers pass students already ordered for display.
pub fn student_select(students: &[students::Model]) -> Markup {
    html! {
        select name="student_id" {
            option value="" { "-- choose a student --" }
            @for student in students {
                option value=(student.id) { (student.name) }
            }
        }
    }
}

pub fn delete_button(action: &str, label: &str) -> Markup {
    html! {
        form method="post" action=(action) class="inline" {
            button type="submit" class="danger" { (label) }
        }
    }
}
