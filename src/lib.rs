use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod gallery;
pub mod settings;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, web};

use repositories::project::ProjectRepository;
use repositories::sqlx_repo::SqlxProjectRepo;
use use_cases::projects::ProjectHandler;

pub struct AppState {
    pub project_handler: ProjectHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let project_repo = Arc::new(SqlxProjectRepo::new(pool));

        AppState {
            project_handler: ProjectHandler::new(project_repo),
        }
    }

    /// Builds the state over any store implementation. Integration tests use
    /// this to drive the full HTTP surface against an in-memory store.
    pub fn with_repo(project_repo: Arc<dyn ProjectRepository>) -> Self {
        AppState {
            project_handler: ProjectHandler::new(project_repo),
        }
    }
}
