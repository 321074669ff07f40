
use std::sync::Arc;
use std::time::Duration;

use mockall::mock;
use reqwest::StatusCode;
use serde_json::Value;

use portfolio_api::{
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};
use test_utils::*;

#[actix_rt::test]
async fn list_returns_empty_array_on_fresh_store() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/projects", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "[]");
}

#[actix_rt::test]
async fn create_returns_created_record_with_location() {
    let app = TestApp::spawn().await;

    let response = app.post_project(&sample_payload("Ray Tracer")).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get("location")
        .expect("Location header missing")
        .to_str()
        .unwrap()
        .to_string();

    let created: Project = response.json().await.unwrap();
    assert_eq!(location, format!("/api/projects/{}", created.id));
    assert_eq!(created.title, "Ray Tracer");
    assert!(created.is_active);
    assert_eq!(created.created_at, created.updated_at);
}

#[actix_rt::test]
async fn create_rejects_overlong_title_naming_the_field() {
    let app = TestApp::spawn().await;

    let mut payload = sample_payload("placeholder");
    payload["title"] = Value::String("x".repeat(101));

    let response = app.post_project(&payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "title"));

    assert!(app.list_projects().await.is_empty());
}

#[actix_rt::test]
async fn create_rejects_empty_technologies() {
    let app = TestApp::spawn().await;

    let mut payload = sample_payload("No Tech");
    payload["technologies"] = Value::String(String::new());

    let response = app.post_project(&payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "technologies"));
}

#[actix_rt::test]
async fn get_round_trips_created_project() {
    let app = TestApp::spawn().await;
    let created = app.create_sample_project("Round Trip").await;

    let response = app.get_project(created.id).await;

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Project = response.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[actix_rt::test]
async fn get_missing_project_returns_404_naming_the_id() {
    let app = TestApp::spawn().await;

    let response = app.get_project(999).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Project with ID 999 not found");
}

#[actix_rt::test]
async fn list_orders_newest_first() {
    let app = TestApp::spawn().await;

    for title in ["First", "Second", "Third"] {
        app.create_sample_project(title).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let titles: Vec<String> = app
        .list_projects()
        .await
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[actix_rt::test]
async fn update_replaces_fields_and_advances_updated_at() {
    let app = TestApp::spawn().await;
    let created = app.create_sample_project("Before").await;

    tokio::time::sleep(Duration::from_millis(5)).await;

    let mut update = UpdateProjectRequest::from(created.clone());
    update.title = "After".to_string();
    let response = app
        .put_project(created.id, &serde_json::to_value(&update).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.text().await.unwrap().is_empty());

    let fetched: Project = app.get_project(created.id).await.json().await.unwrap();
    assert_eq!(fetched.title, "After");
    assert_eq!(fetched.created_at, created.created_at);
    assert!(fetched.updated_at > created.updated_at);
}

#[actix_rt::test]
async fn update_rejects_body_id_mismatch() {
    let app = TestApp::spawn().await;

    let mut payload = sample_payload("Mismatch");
    payload["id"] = Value::from(6);
    payload["isActive"] = Value::from(true);

    let response = app.put_project(5, &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Project ID mismatch");
}

#[actix_rt::test]
async fn update_missing_project_returns_404() {
    let app = TestApp::spawn().await;

    let mut payload = sample_payload("Ghost");
    payload["id"] = Value::from(999);
    payload["isActive"] = Value::from(true);

    let response = app.put_project(999, &payload).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Project with ID 999 not found");
}

#[actix_rt::test]
async fn update_requires_is_active_field() {
    let app = TestApp::spawn().await;
    let created = app.create_sample_project("Flagless").await;

    // Full replace takes the full record; a body without isActive is malformed.
    let mut payload = sample_payload("Flagless");
    payload["id"] = Value::from(created.id);

    let response = app.put_project(created.id, &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("isActive"));
}

#[actix_rt::test]
async fn update_reactivates_soft_deleted_project() {
    let app = TestApp::spawn().await;
    let created = app.create_sample_project("Phoenix").await;

    app.delete_project(created.id).await;
    assert_eq!(
        app.get_project(created.id).await.status(),
        StatusCode::NOT_FOUND
    );

    let mut update = UpdateProjectRequest::from(created.clone());
    update.is_active = true;
    let response = app
        .put_project(created.id, &serde_json::to_value(&update).unwrap())
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched: Project = app.get_project(created.id).await.json().await.unwrap();
    assert!(fetched.is_active);
    assert_eq!(fetched.title, "Phoenix");
}

#[actix_rt::test]
async fn delete_soft_deletes_and_hides_from_reads() {
    let app = TestApp::spawn().await;
    let created = app.create_sample_project("Retired").await;

    let response = app.delete_project(created.id).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        app.get_project(created.id).await.status(),
        StatusCode::NOT_FOUND
    );
    assert!(app.list_projects().await.is_empty());

    // The row survives; only the administrative read still sees it.
    let all: Vec<Project> = app
        .client
        .get(format!("{}/admin/projects", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert!(!all[0].is_active);
}

#[actix_rt::test]
async fn delete_is_idempotent() {
    let app = TestApp::spawn().await;
    let created = app.create_sample_project("Twice Deleted").await;

    assert_eq!(
        app.delete_project(created.id).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        app.delete_project(created.id).await.status(),
        StatusCode::NO_CONTENT
    );
}

#[actix_rt::test]
async fn delete_missing_project_returns_404() {
    let app = TestApp::spawn().await;

    let response = app.delete_project(999).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Project with ID 999 not found");
}

#[actix_rt::test]
async fn non_numeric_path_id_returns_400() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/projects/abc", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Path error"));
}

#[actix_rt::test]
async fn malformed_json_body_returns_400() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/projects", app.address))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("JSON payload error"));
}

#[actix_rt::test]
async fn home_banner_and_health_respond() {
    let app = TestApp::spawn().await;

    let banner: Value = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(banner["status"], "Ok");
    assert_eq!(banner["projects"], "/api/projects");

    let health: Value = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "OK");
}

mock! {
    pub FaultyRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for FaultyRepo {
        async fn list_active_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn list_all_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn get_active_project(&self, id: i64) -> Result<Option<Project>, AppError>;
        async fn create_project(&self, request: &NewProjectRequest) -> Result<Project, AppError>;
        async fn replace_project(&self, id: i64, request: &UpdateProjectRequest) -> Result<Option<Project>, AppError>;
        async fn deactivate_project(&self, id: i64) -> Result<Option<Project>, AppError>;
        async fn check_connection(&self) -> Result<(), AppError>;
    }
}

#[actix_rt::test]
async fn storage_fault_surfaces_as_opaque_500() {
    let mut repo = MockFaultyRepo::new();
    repo.expect_list_active_projects()
        .returning(|| Err(AppError::InternalError("connection reset".into())));

    let app = TestApp::spawn_with_repo(Arc::new(repo)).await;

    let response = app
        .client
        .get(format!("{}/api/projects", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
}
