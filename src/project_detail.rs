//! Project detail page: one project, its tasks and its completion

use crate::api::{routes, ApiClient};
use crate::dashboard::Phase;
use crate::forms::{Modal, TaskForm};
use crate::resource::{Confirm, ListState, Submission};
use crate::tasks::{TaskService, TaskToggle};
use crate::types::{AppError, Developer, Project, Result, Task, TaskRequest};
use serde::Deserialize;

pub const NOT_FOUND_MESSAGE: &str = "Project not found";

/// How the project record itself is fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectLookup {
    /// Scan `GET /api/admin/projects` for the id
    #[default]
    ScanAdminList,
    /// `GET /api/projects/{id}`, for backends that serve single projects
    Direct,
}

/// Everything the page shows, fetched in one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDetailData {
    pub project: Option<Project>,
    pub tasks: Vec<Task>,
    pub completion: u8,
}

#[derive(Clone)]
pub struct ProjectDetailService {
    api: ApiClient,
    project_id: i64,
    lookup: ProjectLookup,
    tasks: TaskService,
}

impl ProjectDetailService {
    pub fn new(api: ApiClient, project_id: i64, lookup: ProjectLookup, toggle: TaskToggle) -> Self {
        Self {
            tasks: TaskService::new(api.clone(), toggle),
            api,
            project_id,
            lookup,
        }
    }

    pub fn project_id(&self) -> i64 {
        self.project_id
    }

    /// `Ok(None)` when the backend has no such project
    pub async fn project(&self) -> Result<Option<Project>> {
        match self.lookup {
            ProjectLookup::Direct => {
                match self.api.get::<Project>(&routes::project(self.project_id)).await {
                    Ok(project) => Ok(Some(project)),
                    Err(AppError::Request { status: 404, .. }) => Ok(None),
                    Err(e) => Err(e),
                }
            }
            ProjectLookup::ScanAdminList => {
                let projects: Vec<Project> = self.api.get(routes::ADMIN_PROJECTS).await?;
                Ok(projects.into_iter().find(|p| p.id == self.project_id))
            }
        }
    }

    /// Project, tasks, then completion. Failures are logged; completion
    /// failures read as 0.
    pub async fn load(&self) -> ProjectDetailData {
        let project = match self.project().await {
            Ok(project) => project,
            Err(e) => {
                if !e.is_cancelled() {
                    tracing::error!(project_id = self.project_id, "Failed to load project: {}", e);
                }
                None
            }
        };

        let tasks = match self.tasks.list(self.project_id).await {
            Ok(tasks) => tasks,
            Err(e) => {
                if !e.is_cancelled() {
                    tracing::error!(project_id = self.project_id, "Failed to load tasks: {}", e);
                }
                Vec::new()
            }
        };

        let completion = self.tasks.completion(self.project_id).await;

        ProjectDetailData {
            project,
            tasks,
            completion,
        }
    }

    /// Each mutation is followed by exactly one `load`
    pub async fn add_task(&self, submission: &Submission<TaskRequest>) -> Result<ProjectDetailData> {
        self.tasks.send(submission).await?;
        Ok(self.load().await)
    }

    pub async fn toggle_task(&self, task: &Task) -> Result<ProjectDetailData> {
        self.tasks.send_toggle(task).await?;
        Ok(self.load().await)
    }

    /// Confirmed delete followed by a full reload; `Ok(None)` when declined
    pub async fn delete_task(
        &self,
        task_id: i64,
        confirm: &dyn Confirm,
    ) -> Result<Option<ProjectDetailData>> {
        if !self.tasks.remove(self.project_id, task_id, confirm).await? {
            return Ok(None);
        }
        Ok(Some(self.load().await))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectDetailView {
    pub phase: Phase,
    pub project_id: i64,
    pub project: Option<Project>,
    pub tasks: ListState<Task>,
    pub completion: u8,
    pub task_modal: Modal<TaskForm>,
}

impl ProjectDetailView {
    pub fn new(project_id: i64) -> Self {
        Self {
            project_id,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, data: ProjectDetailData) {
        self.project = data.project;
        self.tasks.replace(data.tasks);
        self.completion = data.completion;
        self.phase = Phase::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::InitialLoad
    }

    pub fn is_not_found(&self) -> bool {
        self.phase == Phase::Ready && self.project.is_none()
    }

    /// Developers a new task can be assigned to
    pub fn developers(&self) -> &[Developer] {
        self.project
            .as_ref()
            .map(|p| p.developers.as_slice())
            .unwrap_or(&[])
    }

    pub fn open_task_modal(&mut self) {
        self.task_modal
            .open_create_with(TaskForm::for_project(self.project_id));
    }
}

/// Assignee shown under a task
pub fn assignee_label(task: &Task) -> &str {
    task.developer
        .as_ref()
        .map(|d| d.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("N/A")
}
