use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler {
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepository>) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every active project, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_active_projects().await
    }

    /// Lists every project regardless of the active flag
    pub async fn list_all_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_all_projects().await
    }

    /// Retrieves an active project by its ID
    pub async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        self.project_repo
            .get_active_project(id)
            .await?
            .ok_or_else(|| project_not_found(id))
    }

    /// Creates a new project with the provided data
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        request.validate()?;
        self.project_repo.create_project(&request).await
    }

    /// Replaces a project wholesale; the body must agree with the addressed ID
    pub async fn replace_project(
        &self,
        id: i64,
        request: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        if request.id != id {
            return Err(AppError::BadRequest("Project ID mismatch".into()));
        }
        request.validate()?;

        self.project_repo
            .replace_project(id, request)
            .await?
            .ok_or_else(|| project_not_found(id))
    }

    /// Soft-deletes a project; repeating the call succeeds again
    pub async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        self.project_repo
            .deactivate_project(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| project_not_found(id))
    }
}

fn project_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Project with ID {} not found", id))
}
