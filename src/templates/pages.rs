use maud::{html, Markup};

use crate::db::entities::{productions, songs, students};
use crate::db::repositories::ProductionBundle;

use super::components::{delete_button, production_card, student_select, Flash};
use super::layout::base_layout;

pub fn home_page() -> Markup {
    base_layout(
        "Home",
        None,
        html! {
            h1 { "Greenroom" }
            p { "Production programs for the school drama department." }
            div class="links" {
                a href="/viewer" { "Browse productions" }
                a href="/director" { "Director tools" }
            }
        },
    )
}

pub fn viewer_list_page(productions: &[productions::Model]) -> Markup {
    base_layout(
        "Productions",
        None,
        html! {
            h1 { "Productions" }
            @if productions.is_empty() {
                p class="muted" { "No productions yet." }
            }
            div class="grid" {
                @for production in productions {
                    (production_card(production, &format!("/viewer/production/{}", production.id)))
                }
            }
        },
    )
}

pub fn viewer_production_page(bundle: &ProductionBundle) -> Markup {
    base_layout(
        &bundle.production.title,
        None,
        html! {
            (production_header(&bundle.production))
            (cast_section(bundle))
            (crew_section(bundle))
            (team_section(bundle))
            (song_section(&bundle.songs))
            (thanks_section(bundle))
        },
    )
}

pub fn director_page(productions: &[productions::Model], flash: Option<Flash>) -> Markup {
    base_layout(
        "Director",
        flash,
        html! {
            h1 { "Director" }
            section {
                h2 { "Productions" }
                @if productions.is_empty() {
                    p class="muted" { "No productions yet." }
                }
                ul {
                    @for production in productions {
                        li {
                            a href=(format!("/view/production/{}", production.id)) {
                                (production.title)
                            }
                        }
                    }
                }
            }
            section {
                h2 { "New production" }
                form method="post" action="/edit/create_production" enctype="multipart/form-data" class="stack" {
                    (production_fields(None))
                    button type="submit" { "Create" }
                }
            }
            section {
                h2 { "Import students" }
                p class="muted" { "CSV with columns name, sex, year. Existing names are skipped." }
                form method="post" action="/edit/import_students" enctype="multipart/form-data" {
                    input type="file" name="file" accept=".csv";
                    button type="submit" { "Import" }
                }
            }
        },
    )
}

pub fn production_page(bundle: &ProductionBundle, flash: Option<Flash>) -> Markup {
    let production = &bundle.production;
    base_layout(
        &production.title,
        flash,
        html! {
            (production_header(production))
            div class="links" {
                a href=(format!("/edit/production/{}/edit", production.id)) { "Edit details" }
                a href=(format!("/view/production/{}/cast", production.id)) { "Manage cast" }
                a href=(format!("/view/production/{}/crew", production.id)) { "Manage crew" }
                a href=(format!("/view/production/{}/songs", production.id)) { "Manage songs" }
                a href=(format!("/viewer/production/{}", production.id)) { "Viewer page" }
            }
            (cast_section(bundle))
            (crew_section(bundle))
            section {
                h2 { "Creative team" }
                ul {
                    @for member in &bundle.team {
                        li {
                            (member.name) ", " (member.position)
                            @if !member.notes.is_empty() {
                                span class="muted" { " (" (member.notes) ")" }
                            }
                            " "
                            (delete_button(&format!("/edit/team/{}/delete", member.id), "Remove"))
                        }
                    }
                }
                form method="post" action=(format!("/edit/production/{}/team", production.id)) class="stack" {
                    label { "Name" input type="text" name="name"; }
                    label { "Position" input type="text" name="position"; }
                    label { "Notes" input type="text" name="notes"; }
                    button type="submit" { "Add team member" }
                }
            }
            (song_section(&bundle.songs))
            section {
                h2 { "Thanks" }
                ul {
                    @for entry in &bundle.thanks {
                        li {
                            (entry.text)
                            " "
                            (delete_button(&format!("/edit/thanks/{}/delete", entry.id), "Remove"))
                        }
                    }
                }
                form method="post" action=(format!("/edit/production/{}/thanks", production.id)) class="stack" {
                    label { "Text" input type="text" name="text"; }
                    button type="submit" { "Add thanks" }
                }
            }
            section {
                h2 { "Danger zone" }
                (delete_button(&format!("/edit/production/{}/delete", production.id), "Delete production"))
            }
        },
    )
}

pub fn production_edit_page(production: &productions::Model, flash: Option<Flash>) -> Markup {
    base_layout(
        &format!("Edit {}", production.title),
        flash,
        html! {
            h1 { "Edit " (production.title) }
            form method="post" action=(format!("/edit/production/{}/edit", production.id)) enctype="multipart/form-data" class="stack" {
                (production_fields(Some(production)))
                button type="submit" { "Save" }
            }
            p {
                a href=(format!("/view/production/{}", production.id)) { "Back to production" }
            }
        },
    )
}

pub fn cast_page(
    bundle: &ProductionBundle,
    students: &[students::Model],
    flash: Option<Flash>,
) -> Markup {
    let production = &bundle.production;
    base_layout(
        &format!("Cast of {}", production.title),
        flash,
        html! {
            h1 { "Cast of " (production.title) }
            section {
                ul class="cast" {
                    @for entry in &bundle.cast {
                        li {
                            strong { (entry.role.name) }
                            @if entry.role.is_group { span class="tag" { "group" } }
                            ul {
                                @for (assignment, student) in &entry.members {
                                    li {
                                        (student.name)
                                        " "
                                        (delete_button(&format!("/edit/role_assignment/{}/delete", assignment.id), "Remove"))
                                    }
                                }
                            }
                        }
                    }
                }
            }
            section {
                h2 { "Add cast assignment" }
                form method="post" action=(format!("/edit/production/{}/cast", production.id)) class="stack" {
                    label { "Role" input type="text" name="role"; }
                    label {
                        input type="checkbox" name="is_group";
                        " Group role (ensemble)"
                    }
                    label { "Student" (student_select(students)) }
                    button type="submit" { "Assign" }
                }
            }
            p {
                a href=(format!("/view/production/{}", production.id)) { "Back to production" }
            }
        },
    )
}

pub fn crew_page(
    bundle: &ProductionBundle,
    students: &[students::Model],
    flash: Option<Flash>,
) -> Markup {
    let production = &bundle.production;
    base_layout(
        &format!("Crew of {}", production.title),
        flash,
        html! {
            h1 { "Crew of " (production.title) }
            section {
                ul {
                    @for (assignment, student) in &bundle.crew {
                        li {
                            (student.name) ", " (assignment.responsibility)
                            " "
                            (delete_button(&format!("/edit/crew/{}/delete", assignment.id), "Remove"))
                        }
                    }
                }
            }
            section {
                h2 { "Add crew member" }
                form method="post" action=(format!("/edit/production/{}/crew", production.id)) class="stack" {
                    label { "Student" (student_select(students)) }
                    label { "Responsibility" input type="text" name="responsibility" value="Crew"; }
                    button type="submit" { "Add" }
                }
            }
            p {
                a href=(format!("/view/production/{}", production.id)) { "Back to production" }
            }
        },
    )
}

pub fn songs_page(bundle: &ProductionBundle, flash: Option<Flash>) -> Markup {
    let production = &bundle.production;
    base_layout(
        &format!("Songs of {}", production.title),
        flash,
        html! {
            h1 { "Songs of " (production.title) }
            section {
                @for (i, song) in bundle.songs.iter().enumerate() {
                    @if i == 0 || bundle.songs[i - 1].act != song.act {
                        h3 { "Act " (song.act) }
                    }
                    form method="post" action=(format!("/edit/song/{}/edit", song.id)) class="inline" {
                        input type="text" name="title" value=(song.title);
                        input type="text" name="performers" value=(song.performers_text);
                        input type="number" name="act" value=(song.act) min="1";
                        button type="submit" { "Save" }
                    }
                    " "
                    (delete_button(&format!("/edit/song/{}/delete", song.id), "Remove"))
                }
            }
            section {
                h2 { "Add song" }
                form method="post" action=(format!("/edit/production/{}/songs", production.id)) class="stack" {
                    label { "Title" input type="text" name="title"; }
                    label { "Performers" input type="text" name="performers"; }
                    label { "Act" input type="number" name="act" value="1" min="1"; }
                    button type="submit" { "Add" }
                }
            }
            p {
                a href=(format!("/view/production/{}", production.id)) { "Back to production" }
            }
        },
    )
}

fn production_header(production: &productions::Model) -> Markup {
    html! {
        header {
            @if let Some(cover) = &production.cover_path {
                img class="cover" src=(cover) alt=(production.title);
            }
            h1 { (production.title) }
            @if !production.subtitle.is_empty() {
                p class="muted" { (production.subtitle) }
            }
            p class="muted" {
                @if !production.dates_text.is_empty() { (production.dates_text) " · " }
                @if !production.location.is_empty() { (production.location) " · " }
                (production.price)
            }
            @if !production.notes.is_empty() {
                p { (production.notes) }
            }
            @if !production.copyright.is_empty() {
                p class="muted" { "© " (production.copyright) }
            }
        }
    }
}

fn cast_section(bundle: &ProductionBundle) -> Markup {
    html! {
        section {
            h2 { "Cast" }
            ul {
                @for entry in &bundle.cast {
                    li {
                        strong { (entry.role.name) }
                        @if entry.role.is_group { span class="tag" { "group" } }
                        ": "
                        (entry
                            .members
                            .iter()
                            .map(|(_, student)| student.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", "))
                    }
                }
            }
        }
    }
}

fn crew_section(bundle: &ProductionBundle) -> Markup {
    html! {
        section {
            h2 { "Crew" }
            ul {
                @for (assignment, student) in &bundle.crew {
                    li { (student.name) ", " (assignment.responsibility) }
                }
            }
        }
    }
}

fn team_section(bundle: &ProductionBundle) -> Markup {
    html! {
        section {
            h2 { "Creative team" }
            ul {
                @for member in &bundle.team {
                    li {
                        (member.name) ", " (member.position)
                        @if !member.notes.is_empty() {
                            span class="muted" { " (" (member.notes) ")" }
                        }
                    }
                }
            }
        }
    }
}

fn song_section(songs: &[songs::Model]) -> Markup {
    html! {
        section {
            h2 { "Songs" }
            @for (i, song) in songs.iter().enumerate() {
                @if i == 0 || songs[i - 1].act != song.act {
                    h3 { "Act " (song.act) }
                }
                p {
                    (song.title)
                    @if !song.performers_text.is_empty() {
                        span class="muted" { " (" (song.performers_text) ")" }
                    }
                }
            }
        }
    }
}

fn thanks_section(bundle: &ProductionBundle) -> Markup {
    html! {
        section {
            h2 { "Thanks" }
            ul {
                @for entry in &bundle.thanks {
                    li { (entry.text) }
                }
            }
        }
    }
}

fn production_fields(existing: Option<&productions::Model>) -> Markup {
    let field = |pick: fn(&productions::Model) -> &str| existing.map(pick).unwrap_or("");
    html! {
        label { "Title" input type="text" name="title" value=(field(|p| &p.title)); }
        label { "Subtitle" input type="text" name="subtitle" value=(field(|p| &p.subtitle)); }
        label { "Dates" input type="text" name="dates" value=(field(|p| &p.dates_text)); }
        label { "Location" input type="text" name="location" value=(field(|p| &p.location)); }
        label { "Price" input type="text" name="price" value=(field(|p| &p.price)); }
        label { "Copyright" input type="text" name="copyright" value=(field(|p| &p.copyright)); }
        label { "Notes" textarea name="notes" { (field(|p| &p.notes)) } }
        label { "Cover image" input type="file" name="cover" accept="image/png,image/jpeg,image/gif"; }
    }
}
