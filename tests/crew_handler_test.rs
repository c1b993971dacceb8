//! Integration tests for crew, creative team, and thanks routes

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use greenroom::db::entities::{crew_assignments, team_members, thanks};
use greenroom::handlers;
use greenroom::state::AppState;
use greenroom::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .merge(handlers::routes(&state.config.upload_dir))
        .with_state(state.clone())
}

fn location(response: &axum::response::Response) -> String {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

async fn post_form(app: Router, uri: &str, body: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_add_crew_member() {
    let state = setup_test_app_state().await;
    let production = create_test_production(&state.db, "The Little Mermaid").await;
    let student = create_test_student(&state.db, "Leo Yauk").await;
    let app = create_test_router(&state);

    let response = post_form(
        app,
        &format!("/edit/production/{}/crew", production.id),
        &format!("student_id={}&responsibility=Lighting", student.id),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).contains("kind=success"));

    let rows = crew_assignments::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].responsibility, "Lighting");
}

#[tokio::test]
async fn test_add_crew_without_student_leaves_list_unchanged() {
    let state = setup_test_app_state().await;
    let production = create_test_production(&state.db, "The Little Mermaid").await;
    let app = create_test_router(&state);

    let response = post_form(
        app,
        &format!("/edit/production/{}/crew", production.id),
        "student_id=&responsibility=Lighting",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).contains("kind=error"));
    assert!(crew_assignments::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_crew_defaults_responsibility() {
    let state = setup_test_app_state().await;
    let production = create_test_production(&state.db, "The Little Mermaid").await;
    let student = create_test_student(&state.db, "Leo Yauk").await;
    let app = create_test_router(&state);

    post_form(
        app,
        &format!("/edit/production/{}/crew", production.id),
        &format!("student_id={}&responsibility=", student.id),
    )
    .await;

    let rows = crew_assignments::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(rows[0].responsibility, "Crew");
}

#[tokio::test]
async fn test_remove_crew_member() {
    let state = setup_test_app_state().await;
    let production = create_test_production(&state.db, "The Little Mermaid").await;
    let student = create_test_student(&state.db, "Leo Yauk").await;
    let assignment = create_test_crew(&state.db, production.id, student.id, "Stage Crew / Tech").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/edit/crew/{}/delete", assignment.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response).split('?').next().unwrap(),
        format!("/view/production/{}/crew", production.id)
    );
    assert!(crew_assignments::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_team_member_requires_name_and_position() {
    let state = setup_test_app_state().await;
    let production = create_test_production(&state.db, "The Little Mermaid").await;
    let app = create_test_router(&state);
    let uri = format!("/edit/production/{}/team", production.id);

    let response = post_form(app.clone(), &uri, "name=Bryan+Wendt&position=").await;
    assert!(location(&response).contains("kind=error"));

    let response = post_form(app, &uri, "name=&position=Choreographer").await;
    assert!(location(&response).contains("kind=error"));

    assert!(team_members::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_and_remove_team_member() {
    let state = setup_test_app_state().await;
    let production = create_test_production(&state.db, "The Little Mermaid").await;
    let app = create_test_router(&state);

    post_form(
        app.clone(),
        &format!("/edit/production/{}/team", production.id),
        "name=Bryan+Wendt&position=Musical+Director",
    )
    .await;

    let rows = team_members::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bryan Wendt");
    assert_eq!(rows[0].position, "Musical Director");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/edit/team/{}/delete", rows[0].id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(team_members::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_thanks_requires_text() {
    let state = setup_test_app_state().await;
    let production = create_test_production(&state.db, "The Little Mermaid").await;
    let app = create_test_router(&state);

    let response = post_form(
        app,
        &format!("/edit/production/{}/thanks", production.id),
        "text=",
    )
    .await;

    assert!(location(&response).contains("kind=error"));
    assert!(thanks::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_and_remove_thanks() {
    let state = setup_test_app_state().await;
    let production = create_test_production(&state.db, "The Little Mermaid").await;
    let app = create_test_router(&state);

    post_form(
        app.clone(),
        &format!("/edit/production/{}/thanks", production.id),
        "text=Special+thanks+to+the+cast%21",
    )
    .await;

    let rows = thanks::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text, "Special thanks to the cast!");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/edit/thanks/{}/delete", rows[0].id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(thanks::Entity::find().all(&state.db).await.unwrap().is_empty());
}
