//! Client dashboard: read-only project list with status tabs

use super::{settle, Phase};
use crate::api::{routes, ApiClient};
use crate::filter::{filter_projects, ProjectTab};
use crate::resource::ListState;
use crate::types::{Project, Result};

pub const EMPTY_MESSAGE: &str = "No projects found";

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.api.get(routes::PROJECTS).await
    }

    pub async fn load(&self) -> Option<Vec<Project>> {
        settle("projects", self.projects().await)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserView {
    pub phase: Phase,
    pub tab: ProjectTab,
    pub projects: ListState<Project>,
}

impl UserView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish_initial_load(&mut self, projects: Option<Vec<Project>>) {
        if let Some(projects) = projects {
            self.projects.replace(projects);
        }
        self.phase = Phase::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::InitialLoad
    }

    pub fn set_tab(&mut self, tab: ProjectTab) {
        self.tab = tab;
    }

    pub fn filtered_projects(&self) -> Vec<Project> {
        filter_projects(self.projects.items(), self.tab)
    }

    pub fn heading(&self) -> &'static str {
        self.tab.heading()
    }

    pub fn caption(&self) -> &'static str {
        self.tab.caption()
    }
}

/// Client name shown on a project card
pub fn client_label(project: &Project) -> &str {
    project
        .client
        .as_ref()
        .map(|c| c.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("N/A")
}
