use actix_web::{http::header, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, UpdateProjectRequest},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_all_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let projects = project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(project_id, state), fields(project_id = *project_id))]
pub async fn get_project_by_id(
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let project = project_handler.get_project(*project_id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let project = project_handler.create_project(data.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/projects/{}", project.id)))
        .json(project))
}

#[instrument(skip(project_id, state, data), fields(project_id = *project_id))]
pub async fn update_project(
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    project_handler
        .replace_project(*project_id, &data.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(project_id, state), fields(project_id = *project_id))]
pub async fn delete_project(
    project_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    project_handler.delete_project(*project_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

// Administrative read: includes soft-deleted rows, which is how an operator
// finds a record to re-activate through PUT.
#[instrument(skip(state))]
pub async fn admin_get_all_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let projects = project_handler.list_all_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}
