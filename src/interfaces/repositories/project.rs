use async_trait::async_trait;
use sqlx::{self, PgPool};

use crate::{
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Sync + Send {
    async fn list_active_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn list_all_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_active_project(&self, id: i64) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, request: &NewProjectRequest) -> Result<Project, AppError>;
    async fn replace_project(&self, id: i64, request: &UpdateProjectRequest) -> Result<Option<Project>, AppError>;
    async fn deactivate_project(&self, id: i64) -> Result<Option<Project>, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_active_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE is_active = TRUE
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_all_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_active_project(&self, id: i64) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE id = $1 AND is_active = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn create_project(&self, request: &NewProjectRequest) -> Result<Project, AppError> {
        // Single NOW() per statement, so created_at and updated_at are stamped
        // from the same clock reading.
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                title, description, image_url, demo_url, source_url, technologies,
                created_at, updated_at, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW(), TRUE)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(&request.demo_url)
        .bind(&request.source_url)
        .bind(&request.technologies)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn replace_project(&self, id: i64, request: &UpdateProjectRequest) -> Result<Option<Project>, AppError> {
        // No is_active filter: replacing a soft-deleted row with is_active =
        // TRUE re-activates it.
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title = $1,
                description = $2,
                image_url = $3,
                demo_url = $4,
                source_url = $5,
                technologies = $6,
                is_active = $7,
                updated_at = NOW()
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(&request.demo_url)
        .bind(&request.source_url)
        .bind(&request.technologies)
        .bind(request.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn deactivate_project(&self, id: i64) -> Result<Option<Project>, AppError> {
        // No is_active filter: re-deleting an inactive row succeeds again.
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                is_active = FALSE,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
