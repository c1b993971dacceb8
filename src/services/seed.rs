//! Startup seeding from a declarative fixture file.
//!
//! The fixture (`seed/little_mermaid.json` by default) describes one
//! production: header fields, the student roster, individual cast roles,
//! named groups with members, crew, creative team, songs, and thanks.
//! Seeding is idempotent: a production with the fixture's title already in
//! the database short-circuits the whole routine.

use std::path::Path;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, TransactionTrait,
};
use serde::Deserialize;

use crate::db::entities::{
    crew_assignments, productions, role_assignments, songs, students, team_members, thanks,
};
use crate::db::repositories;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct SeedData {
    production: SeedProduction,
    #[serde(default)]
    students: Vec<String>,
    #[serde(default)]
    cast: Vec<SeedCastEntry>,
    #[serde(default)]
    groups: Vec<SeedGroup>,
    #[serde(default)]
    crew: Vec<SeedCrewEntry>,
    #[serde(default)]
    team: Vec<SeedTeamEntry>,
    #[serde(default)]
    songs: Vec<SeedSong>,
    #[serde(default)]
    thanks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedProduction {
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    dates: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    copyright: String,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Deserialize)]
struct SeedCastEntry {
    role: String,
    student: String,
}

#[derive(Debug, Deserialize)]
struct SeedGroup {
    name: String,
    members: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedCrewEntry {
    student: String,
    responsibility: String,
}

#[derive(Debug, Deserialize)]
struct SeedTeamEntry {
    name: String,
    position: String,
}

#[derive(Debug, Deserialize)]
struct SeedSong {
    act: i32,
    title: String,
    #[serde(default)]
    performers: String,
}

/// Load the fixture file and apply it. A missing file logs a warning and
/// skips seeding entirely.
pub async fn run(db: &DatabaseConnection, seed_file: &Path) -> Result<()> {
    let bytes = match tokio::fs::read(seed_file).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Seed file {} not found, skipping seed", seed_file.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let data: SeedData = serde_json::from_slice(&bytes)?;
    apply(db, &data).await
}

async fn apply(db: &DatabaseConnection, data: &SeedData) -> Result<()> {
    let existing = productions::Entity::find()
        .filter(productions::Column::Title.eq(data.production.title.as_str()))
        .one(db)
        .await?;
    if existing.is_some() {
        tracing::debug!(
            "Production '{}' already present, skipping seed",
            data.production.title
        );
        return Ok(());
    }

    let txn = db.begin().await?;
    let now = chrono::Utc::now();

    let production = productions::ActiveModel {
        title: Set(data.production.title.clone()),
        subtitle: Set(data.production.subtitle.clone()),
        cover_path: Set(None),
        dates_text: Set(data.production.dates.clone()),
        location: Set(data.production.location.clone()),
        price: Set(data.production.price.clone()),
        copyright: Set(data.production.copyright.clone()),
        notes: Set(data.production.notes.clone()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    // Full roster first: some students are listed without an individual
    // role (they only appear in groups, or not at all yet).
    for name in &data.students {
        find_or_create_student(&txn, name).await?;
    }

    for entry in &data.cast {
        let role =
            repositories::find_or_create_role(&txn, production.id, &entry.role, false).await?;
        let student = find_or_create_student(&txn, &entry.student).await?;
        role_assignments::ActiveModel {
            role_id: Set(role.id),
            student_id: Set(student.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    for group in &data.groups {
        let role =
            repositories::find_or_create_role(&txn, production.id, &group.name, true).await?;
        for member in &group.members {
            let student = find_or_create_student(&txn, member).await?;
            role_assignments::ActiveModel {
                role_id: Set(role.id),
                student_id: Set(student.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    for entry in &data.crew {
        let student = find_or_create_student(&txn, &entry.student).await?;
        crew_assignments::ActiveModel {
            production_id: Set(production.id),
            student_id: Set(student.id),
            responsibility: Set(entry.responsibility.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    for entry in &data.team {
        team_members::ActiveModel {
            production_id: Set(production.id),
            name: Set(entry.name.clone()),
            position: Set(entry.position.clone()),
            notes: Set(String::new()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    for song in &data.songs {
        songs::ActiveModel {
            production_id: Set(production.id),
            title: Set(song.title.clone()),
            act: Set(song.act),
            performers_text: Set(song.performers.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    for text in &data.thanks {
        thanks::ActiveModel {
            production_id: Set(production.id),
            text: Set(text.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    tracing::info!("Seeded production '{}'", data.production.title);
    Ok(())
}

async fn find_or_create_student<C: ConnectionTrait>(conn: &C, name: &str) -> Result<students::Model> {
    if let Some(student) = students::Entity::find()
        .filter(students::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok(student);
    }
    Ok(students::ActiveModel {
        name: Set(name.to_string()),
        sex: Set(String::new()),
        year: Set(String::new()),
        created_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    }
    .insert(conn)
    .await?)
}
