use derive_more::Display;
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::{entities::project::Project, settings::GalleryConfig};

pub mod fallback;
pub mod render;

/// Advisory shown whenever the gallery falls back to the demo dataset.
pub const DEGRADED_NOTICE: &str = "Using demo data - API not available";

/// Why a load fell back to demo data. Logged only; every variant collapses
/// into the same degraded view.
#[derive(Debug, Display)]
pub enum GalleryError {
    #[display("request failed: {_0}")]
    Transport(reqwest::Error),

    #[display("unexpected status: {_0}")]
    Status(StatusCode),

    #[display("malformed body: {_0}")]
    Decode(reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    Loading,
    Ready,
    Degraded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub state: GalleryState,
    pub projects: Vec<Project>,
    pub notice: Option<String>,
}

impl GalleryView {
    pub fn loading() -> Self {
        GalleryView {
            state: GalleryState::Loading,
            projects: Vec::new(),
            notice: None,
        }
    }
}

pub struct ProjectGallery {
    client: Client,
    base_url: String,
}

impl ProjectGallery {
    pub fn new(config: &GalleryConfig) -> Self {
        ProjectGallery {
            client: Client::new(),
            base_url: config.api_base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    /// One page-load cycle: a single GET, no retry. There is no transition
    /// back out of the resulting state.
    pub async fn load(&self) -> GalleryView {
        match self.fetch_projects().await {
            Ok(projects) => GalleryView {
                state: GalleryState::Ready,
                projects,
                notice: None,
            },
            Err(e) => {
                warn!("falling back to demo data: {}", e);
                GalleryView {
                    state: GalleryState::Degraded,
                    projects: fallback::demo_projects(),
                    notice: Some(DEGRADED_NOTICE.to_string()),
                }
            }
        }
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, GalleryError> {
        let url = format!("{}/projects", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(GalleryError::Transport)?;

        if !response.status().is_success() {
            return Err(GalleryError::Status(response.status()));
        }

        response
            .json::<Vec<Project>>()
            .await
            .map_err(GalleryError::Decode)
    }
}
