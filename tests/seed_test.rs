//! Seed loader tests against the repository's real fixture file.

use std::path::Path;

use greenroom::db::entities::{
    crew_assignments, productions, role_assignments, roles, songs, students, team_members, thanks,
};
use greenroom::db::repositories;
use greenroom::services::seed;
use greenroom::test_utils::*;
use pretty_assertions::assert_eq;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = setup_test_db().await;
    let fixture = seed_fixture_path();

    seed::run(&db, &fixture).await.unwrap();
    seed::run(&db, &fixture).await.unwrap();

    let rows = productions::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "The Little Mermaid");
}

#[tokio::test]
async fn test_seed_missing_file_skips_quietly() {
    let db = setup_test_db().await;

    seed::run(&db, Path::new("/nonexistent/seed.json")).await.unwrap();

    assert!(productions::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_creates_the_three_groups() {
    let db = setup_test_db().await;
    seed::run(&db, &seed_fixture_path()).await.unwrap();

    let groups = roles::Entity::find()
        .filter(roles::Column::IsGroup.eq(true))
        .all(&db)
        .await
        .unwrap();
    let mut names: Vec<&str> = groups.iter().map(|r| r.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Gulls", "Mersisters", "Sea Creature Ensemble"]);

    let individual = roles::Entity::find()
        .filter(roles::Column::IsGroup.eq(false))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(individual.len(), 10);
}

#[tokio::test]
async fn test_seed_populates_program_data() {
    let db = setup_test_db().await;
    seed::run(&db, &seed_fixture_path()).await.unwrap();

    let song_rows = songs::Entity::find().all(&db).await.unwrap();
    assert_eq!(song_rows.len(), 24);
    assert!(song_rows.iter().any(|s| s.title == "Part of Your World" && s.act == 1));
    assert!(song_rows.iter().any(|s| s.title == "Kiss the Girl" && s.act == 2));

    assert_eq!(crew_assignments::Entity::find().all(&db).await.unwrap().len(), 7);
    assert_eq!(team_members::Entity::find().all(&db).await.unwrap().len(), 7);
    assert_eq!(thanks::Entity::find().all(&db).await.unwrap().len(), 3);

    // 29 roster names plus 7 crew students created on demand
    assert_eq!(students::Entity::find().all(&db).await.unwrap().len(), 36);
}

#[tokio::test]
async fn test_seed_does_not_duplicate_students_across_groups() {
    let db = setup_test_db().await;
    seed::run(&db, &seed_fixture_path()).await.unwrap();

    // Alexa Popenhagen is both a Mersister and a Gull; one student row,
    // two role assignments.
    let rows = students::Entity::find()
        .filter(students::Column::Name.eq("Alexa Popenhagen"))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    let assignments = role_assignments::Entity::find()
        .filter(role_assignments::Column::StudentId.eq(rows[0].id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(assignments.len(), 2);
}

#[tokio::test]
async fn test_seeded_bundle_renders_individual_roles_first() {
    let db = setup_test_db().await;
    seed::run(&db, &seed_fixture_path()).await.unwrap();

    let production = productions::Entity::find().one(&db).await.unwrap().unwrap();
    let bundle = repositories::load_production_bundle(&db, production.id)
        .await
        .unwrap()
        .unwrap();

    let first_group_index = bundle.cast.iter().position(|c| c.role.is_group).unwrap();
    assert!(
        bundle.cast[..first_group_index].iter().all(|c| !c.role.is_group),
        "all individual roles come before the first group"
    );
    assert_eq!(bundle.cast[0].role.name, "Ariel");
}
