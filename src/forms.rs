//! Entity modals and their bound forms
//!
//! A [`Modal`] holds its visibility, the entity being edited (if any) and the
//! form. The form is recomputed whenever the editing entity changes: seeded
//! from the entity in edit mode, reset to defaults in create mode.

use crate::resource::{Entity, Submission};
use crate::types::{
    AppError, Project, ProjectRequest, ProjectStatus, ProfileRequest, Result, Task, TaskRequest,
    UserAccount, UserRequest,
};
use serde::Serialize;

/// A form bound to one entity type
pub trait FormModel: Default + Clone {
    type Entity: Entity;
    type Request: Serialize;

    /// Form pre-filled from an existing entity
    fn seed(entity: &Self::Entity) -> Self;

    /// Labels of required fields left empty
    fn missing_fields(&self, editing: bool) -> Vec<&'static str>;

    /// Body sent to the backend
    fn request(&self, editing: bool) -> Self::Request;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ============= Project =============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub client_id: Option<i64>,
    pub developer_ids: Vec<i64>,
}

impl ProjectForm {
    pub fn toggle_developer(&mut self, id: i64) {
        if let Some(pos) = self.developer_ids.iter().position(|d| *d == id) {
            self.developer_ids.remove(pos);
        } else {
            self.developer_ids.push(id);
        }
    }
}

impl FormModel for ProjectForm {
    type Entity = Project;
    type Request = ProjectRequest;

    fn seed(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            status: project.status,
            client_id: project.client.as_ref().map(|c| c.id),
            developer_ids: project.developers.iter().map(|d| d.id).collect(),
        }
    }

    fn missing_fields(&self, _editing: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.title) {
            missing.push("title");
        }
        if blank(&self.description) {
            missing.push("description");
        }
        missing
    }

    fn request(&self, _editing: bool) -> ProjectRequest {
        ProjectRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            client_id: self.client_id,
            developer_ids: self.developer_ids.clone(),
        }
    }
}

// ============= Developer / Client =============

/// Account form shared by the developer and client modals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl FormModel for UserForm {
    type Entity = UserAccount;
    type Request = UserRequest;

    fn seed(account: &UserAccount) -> Self {
        // password is write-only
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            password: String::new(),
        }
    }

    fn missing_fields(&self, editing: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push("name");
        }
        if blank(&self.email) {
            missing.push("email");
        }
        if blank(&self.phone) {
            missing.push("phone");
        }
        if !editing && self.password.is_empty() {
            missing.push("password");
        }
        missing
    }

    fn request(&self, _editing: bool) -> UserRequest {
        UserRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
        }
    }
}

// ============= Profile =============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FormModel for ProfileForm {
    type Entity = UserAccount;
    type Request = ProfileRequest;

    fn seed(account: &UserAccount) -> Self {
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
        }
    }

    fn missing_fields(&self, _editing: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push("name");
        }
        if blank(&self.email) {
            missing.push("email");
        }
        missing
    }

    fn request(&self, _editing: bool) -> ProfileRequest {
        ProfileRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

// ============= Task =============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub project_id: i64,
    pub developer_id: Option<i64>,
}

impl TaskForm {
    /// Empty form targeting `project_id`
    pub fn for_project(project_id: i64) -> Self {
        Self {
            project_id,
            ..Default::default()
        }
    }

    /// Empty form with the assignee fixed, as on the developer dashboard
    pub fn assigned(project_id: i64, developer_id: i64) -> Self {
        Self {
            project_id,
            developer_id: Some(developer_id),
            ..Default::default()
        }
    }
}

impl FormModel for TaskForm {
    type Entity = Task;
    type Request = TaskRequest;

    fn seed(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            project_id: task.project.as_ref().map(|p| p.id).unwrap_or_default(),
            developer_id: task.developer.as_ref().map(|d| d.id),
        }
    }

    fn missing_fields(&self, _editing: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.title) {
            missing.push("title");
        }
        if blank(&self.description) {
            missing.push("description");
        }
        if self.developer_id.is_none() {
            missing.push("developer");
        }
        missing
    }

    fn request(&self, _editing: bool) -> TaskRequest {
        TaskRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            project_id: self.project_id,
            developer_id: self.developer_id.unwrap_or_default(),
        }
    }
}

// ============= Modal =============

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Visibility, editing entity and form of one modal
#[derive(Debug, Clone)]
pub struct Modal<F: FormModel> {
    open: bool,
    editing: Option<F::Entity>,
    pub form: F,
}

impl<F: FormModel> Default for Modal<F> {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            form: F::default(),
        }
    }
}

impl<F: FormModel> Modal<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<&F::Entity> {
        self.editing.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        match &self.editing {
            Some(entity) => FormMode::Edit(entity.id()),
            None => FormMode::Create,
        }
    }

    /// Swap the editing entity and recompute the form from it
    pub fn set_editing(&mut self, editing: Option<F::Entity>) {
        self.form = editing.as_ref().map(F::seed).unwrap_or_default();
        self.editing = editing;
    }

    pub fn open_create(&mut self) {
        self.set_editing(None);
        self.open = true;
    }

    /// Open in create mode with a pre-built form
    pub fn open_create_with(&mut self, form: F) {
        self.editing = None;
        self.form = form;
        self.open = true;
    }

    pub fn open_edit(&mut self, entity: F::Entity) {
        self.set_editing(Some(entity));
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Validate and build the create/update call
    pub fn submission(&self) -> Result<Submission<F::Request>> {
        let editing = self.editing.is_some();
        let missing = self.form.missing_fields(editing);
        if !missing.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Fill all fields: {}",
                missing.join(", ")
            )));
        }

        let body = self.form.request(editing);
        Ok(match self.mode() {
            FormMode::Create => Submission::Create(body),
            FormMode::Edit(id) => Submission::Update(id, body),
        })
    }
}
