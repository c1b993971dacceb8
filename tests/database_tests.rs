//! Database integration tests
//!
//! Covers entity CRUD, foreign key constraints, cascade deletes from the
//! production aggregate, and the shared repository queries.

use greenroom::db::entities::{
    crew_assignments, productions, role_assignments, roles, songs, students, team_members, thanks,
};
use greenroom::db::repositories;
use greenroom::test_utils::*;
use pretty_assertions::assert_eq;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

#[tokio::test]
async fn test_create_student() {
    let db = setup_test_db().await;

    let student = create_test_student(&db, "Tristan Kuhse").await;

    assert_eq!(student.name, "Tristan Kuhse");
    assert_eq!(student.sex, "");
    assert_eq!(student.year, "");
    assert!(student.id > 0);
    assert!(student.created_at.timestamp() > 0);
}

#[tokio::test]
async fn test_create_production() {
    let db = setup_test_db().await;

    let production = create_test_production(&db, "The Little Mermaid").await;

    assert_eq!(production.title, "The Little Mermaid");
    assert_eq!(production.cover_path, None);
    assert!(production.id > 0);
    assert!(production.created_at.timestamp() > 0);
    assert!(production.updated_at.timestamp() > 0);
}

#[tokio::test]
async fn test_role_requires_valid_production() {
    let db = setup_test_db().await;

    let invalid_role = roles::ActiveModel {
        production_id: Set(99999), // Non-existent production
        name: Set("Ariel".to_string()),
        is_group: Set(false),
        order_index: Set(0),
        ..Default::default()
    };

    let result = invalid_role.insert(&db).await;
    assert!(result.is_err(), "Should fail to create role with invalid production_id");
}

#[tokio::test]
async fn test_duplicate_role_triplet_rejected() {
    let db = setup_test_db().await;
    let production = create_test_production(&db, "The Little Mermaid").await;

    create_test_role(&db, production.id, "Ariel", false).await;

    let duplicate = roles::ActiveModel {
        production_id: Set(production.id),
        name: Set("Ariel".to_string()),
        is_group: Set(false),
        order_index: Set(0),
        ..Default::default()
    };

    let result = duplicate.insert(&db).await;
    assert!(result.is_err(), "Unique index should reject a duplicate (production, name, is_group)");
}

#[tokio::test]
async fn test_delete_production_cascades_to_children() {
    let db = setup_test_db().await;
    let production = create_test_production(&db, "The Little Mermaid").await;
    let student = create_test_student(&db, "Tristan Kuhse").await;

    let role = create_test_role(&db, production.id, "Ariel", false).await;
    create_test_role_assignment(&db, role.id, student.id).await;
    create_test_crew(&db, production.id, student.id, "Stage Crew / Tech").await;
    create_test_team_member(&db, production.id, "Bryan Wendt", "Musical Director").await;
    create_test_song(&db, production.id, "Part of Your World", 1).await;
    create_test_thanks(&db, production.id, "Special thanks to the cast!").await;

    production.delete(&db).await.unwrap();

    assert_eq!(roles::Entity::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(role_assignments::Entity::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(crew_assignments::Entity::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(team_members::Entity::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(songs::Entity::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(thanks::Entity::find().all(&db).await.unwrap().len(), 0);

    // Students are a shared pool and are never owned by a production
    assert_eq!(students::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_or_create_role_reuses_row() {
    let db = setup_test_db().await;
    let production = create_test_production(&db, "Annie").await;

    let first = repositories::find_or_create_role(&db, production.id, "Orphan", false)
        .await
        .unwrap();
    let second = repositories::find_or_create_role(&db, production.id, "Orphan", false)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(roles::Entity::find().all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_or_create_role_group_flag_is_distinct() {
    let db = setup_test_db().await;
    let production = create_test_production(&db, "The Little Mermaid").await;

    let individual = repositories::find_or_create_role(&db, production.id, "Gulls", false)
        .await
        .unwrap();
    let group = repositories::find_or_create_role(&db, production.id, "Gulls", true)
        .await
        .unwrap();

    assert_ne!(individual.id, group.id);
    assert_eq!(roles::Entity::find().all(&db).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_bundle_orders_roles_and_songs() {
    let db = setup_test_db().await;
    let production = create_test_production(&db, "The Little Mermaid").await;

    create_test_role(&db, production.id, "Mersisters", true).await;
    create_test_role(&db, production.id, "Sebastian", false).await;
    create_test_role(&db, production.id, "Ariel", false).await;

    create_test_song(&db, production.id, "Positoovity", 2).await;
    create_test_song(&db, production.id, "Under the Sea", 1).await;
    create_test_song(&db, production.id, "Fathoms Below", 1).await;

    let bundle = repositories::load_production_bundle(&db, production.id)
        .await
        .unwrap()
        .unwrap();

    // Individual roles first, alphabetical within each group
    let role_names: Vec<&str> = bundle.cast.iter().map(|c| c.role.name.as_str()).collect();
    assert_eq!(role_names, vec!["Ariel", "Sebastian", "Mersisters"]);

    // Act ascending, then title ascending
    let song_titles: Vec<&str> = bundle.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(song_titles, vec!["Fathoms Below", "Under the Sea", "Positoovity"]);
}

#[tokio::test]
async fn test_bundle_links_students_to_roles() {
    let db = setup_test_db().await;
    let production = create_test_production(&db, "The Little Mermaid").await;
    let student = create_test_student(&db, "Tristan Kuhse").await;
    let role = create_test_role(&db, production.id, "Ariel", false).await;
    create_test_role_assignment(&db, role.id, student.id).await;

    let bundle = repositories::load_production_bundle(&db, production.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(bundle.cast.len(), 1);
    assert_eq!(bundle.cast[0].members.len(), 1);
    assert_eq!(bundle.cast[0].members[0].1.name, "Tristan Kuhse");
}

#[tokio::test]
async fn test_bundle_missing_production() {
    let db = setup_test_db().await;

    let bundle = repositories::load_production_bundle(&db, 42).await.unwrap();
    assert!(bundle.is_none());
}

#[tokio::test]
async fn test_list_productions_ordered_by_title() {
    let db = setup_test_db().await;
    create_test_production(&db, "The Little Mermaid").await;
    create_test_production(&db, "Annie").await;
    create_test_production(&db, "Oklahoma!").await;

    let listed = repositories::list_productions(&db).await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Annie", "Oklahoma!", "The Little Mermaid"]);
}

#[tokio::test]
async fn test_duplicate_role_assignments_allowed() {
    let db = setup_test_db().await;
    let production = create_test_production(&db, "The Little Mermaid").await;
    let student = create_test_student(&db, "Tristan Kuhse").await;
    let role = create_test_role(&db, production.id, "Ariel", false).await;

    create_test_role_assignment(&db, role.id, student.id).await;
    create_test_role_assignment(&db, role.id, student.id).await;

    assert_eq!(role_assignments::Entity::find().all(&db).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_production_row_roundtrip() {
    let db = setup_test_db().await;
    let production = create_test_production(&db, "Annie").await;

    let found = productions::Entity::find_by_id(production.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, production.id);
    assert_eq!(found.title, "Annie");
}
