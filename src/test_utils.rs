//! Test utilities for Greenroom
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - Per-test upload directories
//! - AppState factories
//! - Test data factories

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{
        crew_assignments, productions, role_assignments, roles, songs, students, team_members,
        thanks,
    },
    state::AppState,
};

/// Global counter for test isolation
/// Used to ensure each test gets unique resources (like upload directories)
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Get a unique test ID for this test
pub fn get_test_id() -> u32 {
    TEST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// A fresh upload directory under the system temp dir, unique per test
pub fn test_upload_dir() -> PathBuf {
    std::env::temp_dir().join(format!(
        "greenroom-test-{}-{}",
        std::process::id(),
        get_test_id()
    ))
}

/// The repository's real seed fixture
pub fn seed_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("seed/little_mermaid.json")
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        upload_dir: test_upload_dir(),
        seed_file: seed_fixture_path(),
    }
}

/// Create a complete test AppState with isolated database and upload dir
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    let config = test_config();
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("Failed to create test upload dir");
    AppState::new(db, config)
}

// ============================================================================
// Test Data Factories
// ============================================================================

pub async fn create_test_student(db: &DatabaseConnection, name: &str) -> students::Model {
    students::ActiveModel {
        name: Set(name.to_string()),
        sex: Set(String::new()),
        year: Set(String::new()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test student")
}

pub async fn create_test_production(db: &DatabaseConnection, title: &str) -> productions::Model {
    let now = Utc::now();
    productions::ActiveModel {
        title: Set(title.to_string()),
        subtitle: Set(String::new()),
        cover_path: Set(None),
        dates_text: Set(String::new()),
        location: Set(String::new()),
        price: Set(String::new()),
        copyright: Set(String::new()),
        notes: Set(String::new()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test production")
}

pub async fn create_test_role(
    db: &DatabaseConnection,
    production_id: i32,
    name: &str,
    is_group: bool,
) -> roles::Model {
    roles::ActiveModel {
        production_id: Set(production_id),
        name: Set(name.to_string()),
        is_group: Set(is_group),
        order_index: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test role")
}

pub async fn create_test_role_assignment(
    db: &DatabaseConnection,
    role_id: i32,
    student_id: i32,
) -> role_assignments::Model {
    role_assignments::ActiveModel {
        role_id: Set(role_id),
        student_id: Set(student_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test role assignment")
}

pub async fn create_test_crew(
    db: &DatabaseConnection,
    production_id: i32,
    student_id: i32,
    responsibility: &str,
) -> crew_assignments::Model {
    crew_assignments::ActiveModel {
        production_id: Set(production_id),
        student_id: Set(student_id),
        responsibility: Set(responsibility.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test crew assignment")
}

pub async fn create_test_team_member(
    db: &DatabaseConnection,
    production_id: i32,
    name: &str,
    position: &str,
) -> team_members::Model {
    team_members::ActiveModel {
        production_id: Set(production_id),
        name: Set(name.to_string()),
        position: Set(position.to_string()),
        notes: Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test team member")
}

pub async fn create_test_song(
    db: &DatabaseConnection,
    production_id: i32,
    title: &str,
    act: i32,
) -> songs::Model {
    songs::ActiveModel {
        production_id: Set(production_id),
        title: Set(title.to_string()),
        act: Set(act),
        order_index: Set(0),
        performers_text: Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test song")
}

pub async fn create_test_thanks(
    db: &DatabaseConnection,
    production_id: i32,
    text: &str,
) -> thanks::Model {
    thanks::ActiveModel {
        production_id: Set(production_id),
        text: Set(text.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test thanks")
}

// ============================================================================
// Multipart request bodies
// ============================================================================

/// Builder for multipart/form-data request bodies in handler tests.
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "------greenroom-test-boundary".to_string(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, name, filename, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Returns the content-type header value and the finished body.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        // Verify we can query the database (it has tables from migrations)
        let all = students::Entity::find().all(&db).await.unwrap();
        assert_eq!(all.len(), 0);
    }

    #[tokio::test]
    async fn test_create_test_student() {
        let db = setup_test_db().await;
        let student = create_test_student(&db, "Tristan Kuhse").await;

        assert_eq!(student.name, "Tristan Kuhse");
        assert!(student.id > 0);
    }

    #[tokio::test]
    async fn test_create_test_production() {
        let db = setup_test_db().await;
        let production = create_test_production(&db, "The Little Mermaid").await;

        assert_eq!(production.title, "The Little Mermaid");
        assert_eq!(production.cover_path, None);
        assert!(production.id > 0);
    }

    #[tokio::test]
    async fn test_parallel_databases() {
        // Run two database setups in parallel - they should not interfere
        let (db1, db2) = tokio::join!(setup_test_db(), setup_test_db());

        let student1 = create_test_student(&db1, "Student 1").await;
        let student2 = create_test_student(&db2, "Student 2").await;

        // Both should be ID 1 (separate databases)
        assert_eq!(student1.id, 1);
        assert_eq!(student2.id, 1);
    }
}
