//! Admin dashboard: profile counters, projects, clients and developers

use super::{initial, settle, Phase};
use crate::api::{routes, ApiClient};
use crate::filter::{filter_projects, ProjectTab};
use crate::forms::{Modal, ProfileForm, ProjectForm, UserForm};
use crate::resource::{
    ClientResource, Confirm, DeveloperResource, ListState, ProjectResource, ResourcePaths,
    Submission,
};
use crate::types::{
    AdminProfile, Client, Developer, ProfileRequest, Project, ProjectRequest, ProjectStatus,
    Result, Role, UserAccount, UserRequest,
};

pub const DELETE_PROJECT_PROMPT: &str = "Delete project?";
pub const DELETE_DEVELOPER_PROMPT: &str = "Delete developer?";
pub const DELETE_CLIENT_PROMPT: &str = "Delete client?";

/// Sidebar tabs of the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Ongoing,
    Completed,
    Clients,
    Developers,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Projects,
        AdminTab::Ongoing,
        AdminTab::Completed,
        AdminTab::Clients,
        AdminTab::Developers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Projects => "All Projects",
            AdminTab::Ongoing => "Current Projects",
            AdminTab::Completed => "Completed Projects",
            AdminTab::Clients => "All Clients",
            AdminTab::Developers => "All Developers",
        }
    }

    /// Project filter for project tabs
    pub fn project_tab(&self) -> Option<ProjectTab> {
        match self {
            AdminTab::Projects => Some(ProjectTab::All),
            AdminTab::Ongoing => Some(ProjectTab::Ongoing),
            AdminTab::Completed => Some(ProjectTab::Completed),
            AdminTab::Clients | AdminTab::Developers => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ALL" | "PROJECTS" => Some(AdminTab::Projects),
            "ONGOING" => Some(AdminTab::Ongoing),
            "COMPLETED" => Some(AdminTab::Completed),
            "CLIENTS" => Some(AdminTab::Clients),
            "DEVS" | "DEVELOPERS" => Some(AdminTab::Developers),
            _ => None,
        }
    }
}

/// Result of the initial load. `None` marks a failed fetch.
#[derive(Debug, Clone, Default)]
pub struct AdminData {
    pub profile: Option<AdminProfile>,
    pub projects: Option<Vec<Project>>,
    pub clients: Option<Vec<Client>>,
    pub developers: Option<Vec<Developer>>,
}

#[derive(Clone)]
pub struct AdminService {
    api: ApiClient,
    projects: ProjectResource,
    developers: DeveloperResource,
    clients: ClientResource,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            projects: ProjectResource::new(api.clone(), ResourcePaths::projects()),
            developers: DeveloperResource::new(api.clone(), ResourcePaths::developers()),
            clients: ClientResource::new(api.clone(), ResourcePaths::clients()),
            api,
        }
    }

    pub async fn profile(&self) -> Result<AdminProfile> {
        self.api.get(routes::ADMIN_PROFILE).await
    }

    /// Profile and all three lists, fetched concurrently
    pub async fn load(&self) -> AdminData {
        let (profile, projects, clients, developers) = futures::join!(
            self.profile(),
            self.projects.list(),
            self.clients.list(),
            self.developers.list(),
        );

        AdminData {
            profile: settle("admin profile", profile),
            projects: settle("projects", projects),
            clients: settle("clients", clients),
            developers: settle("developers", developers),
        }
    }

    pub async fn reload_projects(&self) -> Result<Vec<Project>> {
        self.projects.list().await
    }

    pub async fn submit_project(
        &self,
        submission: &Submission<ProjectRequest>,
    ) -> Result<Vec<Project>> {
        self.projects.submit(submission).await
    }

    pub async fn delete_project(
        &self,
        id: i64,
        confirm: &dyn Confirm,
    ) -> Result<Option<Vec<Project>>> {
        self.projects.delete(id, confirm, DELETE_PROJECT_PROMPT).await
    }

    pub async fn submit_developer(
        &self,
        submission: &Submission<UserRequest>,
    ) -> Result<Vec<Developer>> {
        self.developers.submit(submission).await
    }

    pub async fn delete_developer(
        &self,
        id: i64,
        confirm: &dyn Confirm,
    ) -> Result<Option<Vec<Developer>>> {
        self.developers
            .delete(id, confirm, DELETE_DEVELOPER_PROMPT)
            .await
    }

    pub async fn submit_client(&self, submission: &Submission<UserRequest>) -> Result<Vec<Client>> {
        self.clients.submit(submission).await
    }

    pub async fn delete_client(
        &self,
        id: i64,
        confirm: &dyn Confirm,
    ) -> Result<Option<Vec<Client>>> {
        self.clients.delete(id, confirm, DELETE_CLIENT_PROMPT).await
    }

    /// Save the profile, then re-fetch it
    pub async fn update_profile(&self, body: &ProfileRequest) -> Result<AdminProfile> {
        self.api.put_empty(routes::PROFILE_UPDATE, body).await?;
        self.profile().await
    }
}

/// Headline counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub projects: u64,
    pub clients: u64,
    pub developers: u64,
    pub completed: u64,
}

#[derive(Debug, Clone, Default)]
pub struct AdminView {
    pub phase: Phase,
    pub tab: AdminTab,
    pub profile: Option<AdminProfile>,
    pub projects: ListState<Project>,
    pub clients: ListState<Client>,
    pub developers: ListState<Developer>,
    pub project_modal: Modal<ProjectForm>,
    pub developer_modal: Modal<UserForm>,
    pub client_modal: Modal<UserForm>,
    pub profile_modal: Modal<ProfileForm>,
}

impl AdminView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish_initial_load(&mut self, data: AdminData) {
        if let Some(profile) = data.profile {
            self.profile = Some(profile);
        }
        if let Some(projects) = data.projects {
            self.projects.replace(projects);
        }
        if let Some(clients) = data.clients {
            self.clients.replace(clients);
        }
        if let Some(developers) = data.developers {
            self.developers.replace(developers);
        }
        self.phase = Phase::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::InitialLoad
    }

    pub fn set_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    /// Projects under the active tab. Non-project tabs show every project.
    pub fn filtered_projects(&self) -> Vec<Project> {
        let tab = self.tab.project_tab().unwrap_or_default();
        filter_projects(self.projects.items(), tab)
    }

    /// Counters from the profile, falling back to the loaded lists
    pub fn stats(&self) -> AdminStats {
        match &self.profile {
            Some(p) => AdminStats {
                projects: p.total_projects,
                clients: p.total_clients,
                developers: p.total_developers,
                completed: p.completed_projects,
            },
            None => AdminStats {
                projects: self.projects.len() as u64,
                clients: self.clients.len() as u64,
                developers: self.developers.len() as u64,
                completed: self
                    .projects
                    .items()
                    .iter()
                    .filter(|p| p.status == ProjectStatus::Completed)
                    .count() as u64,
            },
        }
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

    /// Open the profile modal seeded from the loaded profile
    pub fn open_profile_editor(&mut self) {
        match &self.profile {
            Some(p) => self.profile_modal.open_edit(UserAccount {
                id: p.id,
                name: p.name.clone(),
                email: p.email.clone(),
                phone: p.phone.clone(),
                role: Some(Role::Admin),
            }),
            None => self.profile_modal.open_create(),
        }
    }
}
