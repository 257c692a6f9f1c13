//! Developer dashboard: assigned projects and their task lists

use super::{initial, settle, Phase};
use crate::api::{routes, ApiClient};
use crate::filter::status_counts;
use crate::forms::{FormModel, Modal, ProfileForm, TaskForm};
use crate::resource::{Confirm, ListState, Submission};
use crate::tasks::{completion_percent, TaskService, TaskToggle};
use crate::types::{AppError, ProfileRequest, Project, Result, Task, TaskRequest, UserAccount};

#[derive(Debug, Clone, Default)]
pub struct DeveloperData {
    pub profile: Option<UserAccount>,
    pub projects: Option<Vec<Project>>,
}

#[derive(Clone)]
pub struct DeveloperService {
    api: ApiClient,
    tasks: TaskService,
}

impl DeveloperService {
    pub fn new(api: ApiClient, toggle: TaskToggle) -> Self {
        Self {
            tasks: TaskService::new(api.clone(), toggle),
            api,
        }
    }

    pub async fn profile(&self) -> Result<UserAccount> {
        self.api.get(routes::DEVELOPER_PROFILE).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.api.get(routes::DEVELOPER_PROJECTS).await
    }

    /// Profile, then assigned projects
    pub async fn load(&self) -> DeveloperData {
        let profile = settle("developer profile", self.profile().await);
        let projects = settle("developer projects", self.projects().await);
        DeveloperData { profile, projects }
    }

    pub async fn tasks(&self, project_id: i64) -> Result<Vec<Task>> {
        self.tasks.list(project_id).await
    }

    pub async fn add_task(&self, submission: &Submission<TaskRequest>) -> Result<Vec<Task>> {
        self.tasks.create(submission).await
    }

    pub async fn toggle_task(&self, project_id: i64, task: &Task) -> Result<Vec<Task>> {
        self.tasks.toggle(project_id, task).await
    }

    pub async fn delete_task(
        &self,
        project_id: i64,
        task_id: i64,
        confirm: &dyn Confirm,
    ) -> Result<Option<Vec<Task>>> {
        self.tasks.delete(project_id, task_id, confirm).await
    }

    pub async fn update_profile(&self, body: &ProfileRequest) -> Result<UserAccount> {
        self.api.put_empty(routes::PROFILE_UPDATE, body).await?;
        self.profile().await
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeveloperView {
    pub phase: Phase,
    pub profile: Option<UserAccount>,
    pub projects: ListState<Project>,
    pub active_project: Option<Project>,
    pub tasks: ListState<Task>,
    pub tasks_loading: bool,
    /// Inline "new task" form; the assignee is always the signed-in developer
    pub draft: TaskForm,
    pub profile_modal: Modal<ProfileForm>,
}

impl DeveloperView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish_initial_load(&mut self, data: DeveloperData) {
        if let Some(profile) = data.profile {
            self.profile = Some(profile);
        }
        if let Some(projects) = data.projects {
            self.projects.replace(projects);
        }
        self.phase = Phase::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::InitialLoad
    }

    /// Select a project; its tasks are loaded next
    pub fn open_project(&mut self, project: Project) {
        let developer_id = self.profile.as_ref().map(|p| p.id);
        self.draft = TaskForm {
            title: std::mem::take(&mut self.draft.title),
            description: std::mem::take(&mut self.draft.description),
            project_id: project.id,
            developer_id,
        };
        self.active_project = Some(project);
        self.tasks_loading = true;
    }

    pub fn active_project_id(&self) -> Option<i64> {
        self.active_project.as_ref().map(|p| p.id)
    }

    pub fn is_active(&self, project_id: i64) -> bool {
        self.active_project_id() == Some(project_id)
    }

    /// Apply a task fetch. Failures keep the previous list.
    pub fn finish_tasks(&mut self, result: Result<Vec<Task>>) {
        if let Some(tasks) = settle("tasks", result) {
            self.tasks.replace(tasks);
        }
        self.tasks_loading = false;
    }

    /// Apply a reloaded list for `project_id`. Ignored, returning false,
    /// once another project has been opened.
    pub fn apply_tasks(&mut self, project_id: i64, tasks: Vec<Task>) -> bool {
        if !self.is_active(project_id) {
            tracing::debug!(project_id, "Dropping tasks for a project that is no longer open");
            return false;
        }
        self.tasks.replace(tasks);
        true
    }

    /// Completion of the open project, computed from its tasks
    pub fn completion(&self) -> u8 {
        completion_percent(self.tasks.items())
    }

    /// (ongoing, completed) project counts
    pub fn stats(&self) -> (usize, usize) {
        status_counts(self.projects.items())
    }

    /// Validate the inline form. Only title and description are asked for.
    pub fn task_submission(&self) -> Result<Submission<TaskRequest>> {
        if self.active_project.is_none() {
            return Err(AppError::InvalidInput("No project selected".to_string()));
        }
        if self.draft.developer_id.is_none() {
            return Err(AppError::InvalidInput("Developer profile not loaded".to_string()));
        }
        let missing = self.draft.missing_fields(false);
        if !missing.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Fill all fields: {}",
                missing.join(", ")
            )));
        }
        Ok(Submission::Create(self.draft.request(false)))
    }

    pub fn clear_draft(&mut self) {
        self.draft.title.clear();
        self.draft.description.clear();
    }

    pub fn display_name(&self) -> String {
        self.profile
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }

    pub fn avatar_initial(&self) -> String {
        initial(&self.display_name())
    }

    pub fn open_profile_editor(&mut self) {
        match self.profile.clone() {
            Some(profile) => self.profile_modal.open_edit(profile),
            None => self.profile_modal.open_create(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectStatus;

    fn me() -> UserAccount {
        UserAccount {
            id: 42,
            name: "dana".into(),
            email: "dana@x.com".into(),
            ..Default::default()
        }
    }

    fn project(id: i64, status: ProjectStatus) -> Project {
        Project {
            id,
            title: format!("p{}", id),
            status,
            ..Default::default()
        }
    }

    fn ready_view() -> DeveloperView {
        let mut view = DeveloperView::new();
        view.finish_initial_load(DeveloperData {
            profile: Some(me()),
            projects: Some(vec![
                project(1, ProjectStatus::Ongoing),
                project(2, ProjectStatus::Completed),
                project(3, ProjectStatus::Ongoing),
            ]),
        });
        view
    }

    #[test]
    fn test_stats_count_by_status() {
        assert_eq!(ready_view().stats(), (2, 1));
    }

    #[test]
    fn test_open_project_targets_draft() {
        let mut view = ready_view();
        view.open_project(project(3, ProjectStatus::Ongoing));
        assert!(view.is_active(3));
        assert!(view.tasks_loading);
        assert_eq!(view.draft.project_id, 3);
        assert_eq!(view.draft.developer_id, Some(42));
    }

    #[test]
    fn test_task_submission_requires_title_and_description() {
        let mut view = ready_view();
        assert!(view.task_submission().is_err());

        view.open_project(project(1, ProjectStatus::Ongoing));
        view.draft.title = "Fix login".into();
        assert!(view.task_submission().is_err());

        view.draft.description = "Token expiry".into();
        match view.task_submission().unwrap() {
            Submission::Create(body) => {
                assert_eq!(body.project_id, 1);
                assert_eq!(body.developer_id, 42);
            }
            other => panic!("Expected create, got {:?}", other),
        }

        view.clear_draft();
        assert!(view.draft.title.is_empty());
        assert_eq!(view.draft.project_id, 1);
    }

    #[test]
    fn test_failed_task_fetch_keeps_previous_list() {
        let mut view = ready_view();
        view.open_project(project(1, ProjectStatus::Ongoing));
        view.finish_tasks(Ok(vec![Task {
            id: 5,
            title: "t".into(),
            completed: true,
            ..Default::default()
        }]));
        view.finish_tasks(Err(AppError::Network("down".into())));

        assert_eq!(view.tasks.len(), 1);
        assert!(!view.tasks_loading);
        assert_eq!(view.completion(), 100);
    }

    #[test]
    fn test_reload_for_previous_project_is_dropped() {
        let mut view = ready_view();
        view.open_project(project(1, ProjectStatus::Ongoing));
        view.finish_tasks(Ok(vec![Task {
            id: 5,
            title: "first".into(),
            ..Default::default()
        }]));

        view.open_project(project(3, ProjectStatus::Ongoing));
        let stale = vec![Task {
            id: 6,
            title: "stale".into(),
            ..Default::default()
        }];
        assert!(!view.apply_tasks(1, stale));
        assert!(view.tasks.find(6).is_none());

        assert!(view.apply_tasks(3, Vec::new()));
        assert!(view.tasks.is_empty());
    }
}
