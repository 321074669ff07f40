use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 100;
const MAX_DESCRIPTION_LENGTH: u64 = 500;
const MAX_URL_LENGTH: u64 = 200;

// ───── Stored Record ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub source_url: Option<String>,
    pub technologies: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Project {
    /// Display labels for the technologies field: split on `,` and trim each
    /// segment. The stored value does no escaping, so empty segments come out
    /// of the split and consumers must tolerate them.
    pub fn technology_labels(&self) -> Vec<&str> {
        self.technologies.split(',').map(str::trim).collect()
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1 to 100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description must be 1 to 500 characters"))]
    pub description: String,

    #[validate(length(max = MAX_URL_LENGTH, message = "Image URL must be at most 200 characters"))]
    pub image_url: Option<String>,

    #[validate(length(max = MAX_URL_LENGTH, message = "Demo URL must be at most 200 characters"))]
    pub demo_url: Option<String>,

    #[validate(length(max = MAX_URL_LENGTH, message = "Source URL must be at most 200 characters"))]
    pub source_url: Option<String>,

    #[validate(length(min = 1, message = "Technologies must not be empty"))]
    pub technologies: String,
}

/// Full-replace payload for PUT. Every stored field is overwritten except
/// `id` and `created_at`; `is_active` is part of the body and replacing a
/// soft-deleted record with `isActive: true` re-activates it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub id: i64,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1 to 100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description must be 1 to 500 characters"))]
    pub description: String,

    #[validate(length(max = MAX_URL_LENGTH, message = "Image URL must be at most 200 characters"))]
    pub image_url: Option<String>,

    #[validate(length(max = MAX_URL_LENGTH, message = "Demo URL must be at most 200 characters"))]
    pub demo_url: Option<String>,

    #[validate(length(max = MAX_URL_LENGTH, message = "Source URL must be at most 200 characters"))]
    pub source_url: Option<String>,

    #[validate(length(min = 1, message = "Technologies must not be empty"))]
    pub technologies: String,

    pub is_active: bool,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<Project> for UpdateProjectRequest {
    fn from(project: Project) -> Self {
        UpdateProjectRequest {
            id: project.id,
            title: project.title,
            description: project.description,
            image_url: project.image_url,
            demo_url: project.demo_url,
            source_url: project.source_url,
            technologies: project.technologies,
            is_active: project.is_active,
        }
    }
}
