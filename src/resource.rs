//! Generic list resource: create/update/delete followed by a full reload
//!
//! [`Resource`] performs the network calls and is cheap to clone into async
//! tasks. [`ListState`] is the view-side copy of the list, always replaced
//! wholesale with what the backend returned.

use crate::api::{routes, ApiClient};
use crate::types::{Client, Developer, Project, Result, Task};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// Record with a backend id
pub trait Entity: DeserializeOwned + Clone + std::fmt::Debug {
    fn id(&self) -> i64;
}

impl Entity for Project {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Task {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for crate::types::UserAccount {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Asks the user to affirm a destructive action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Endpoint set of one resource
#[derive(Clone)]
pub struct ResourcePaths {
    pub list: String,
    pub create: String,
    item: Arc<dyn Fn(i64) -> String + Send + Sync>,
}

impl ResourcePaths {
    pub fn new(
        list: impl Into<String>,
        create: impl Into<String>,
        item: impl Fn(i64) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            list: list.into(),
            create: create.into(),
            item: Arc::new(item),
        }
    }

    pub fn item(&self, id: i64) -> String {
        (self.item)(id)
    }

    /// Projects as seen by the admin
    pub fn projects() -> Self {
        Self::new(routes::PROJECTS, routes::ADMIN_PROJECTS, routes::project)
    }

    pub fn developers() -> Self {
        Self::new(
            routes::ADMIN_DEVELOPERS,
            routes::ADMIN_DEVELOPERS,
            routes::admin_developer,
        )
    }

    pub fn clients() -> Self {
        Self::new(routes::ADMIN_CLIENTS, routes::ADMIN_CLIENTS, routes::admin_client)
    }

    /// Tasks of one project
    pub fn project_tasks(project_id: i64) -> Self {
        Self::new(routes::project_tasks(project_id), routes::TASKS, routes::task)
    }
}

/// Create or update, decided by whether an entity was being edited
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<B> {
    Create(B),
    Update(i64, B),
}

impl<B> Submission<B> {
    /// Request body regardless of mode
    pub fn into_body(self) -> B {
        match self {
            Submission::Create(body) | Submission::Update(_, body) => body,
        }
    }
}

/// Network side of a list of entities
#[derive(Clone)]
pub struct Resource<T> {
    api: ApiClient,
    paths: ResourcePaths,
    _entity: PhantomData<fn() -> T>,
}

pub type ProjectResource = Resource<Project>;
pub type DeveloperResource = Resource<Developer>;
pub type ClientResource = Resource<Client>;
pub type TaskResource = Resource<Task>;

impl<T: Entity> Resource<T> {
    pub fn new(api: ApiClient, paths: ResourcePaths) -> Self {
        Self {
            api,
            paths,
            _entity: PhantomData,
        }
    }

    pub fn paths(&self) -> &ResourcePaths {
        &self.paths
    }

    /// Fetch the whole list
    pub async fn list(&self) -> Result<Vec<T>> {
        self.api.get(&self.paths.list).await
    }

    /// POST, then reload
    pub async fn create<B: Serialize>(&self, body: &B) -> Result<Vec<T>> {
        self.api.post_empty(&self.paths.create, body).await?;
        self.list().await
    }

    /// PUT, then reload
    pub async fn update<B: Serialize>(&self, id: i64, body: &B) -> Result<Vec<T>> {
        self.api.put_empty(&self.paths.item(id), body).await?;
        self.list().await
    }

    pub async fn submit<B: Serialize>(&self, submission: &Submission<B>) -> Result<Vec<T>> {
        self.send(submission).await?;
        self.list().await
    }

    /// POST or PUT without the follow-up reload
    pub async fn send<B: Serialize>(&self, submission: &Submission<B>) -> Result<()> {
        match submission {
            Submission::Create(body) => self.api.post_empty(&self.paths.create, body).await,
            Submission::Update(id, body) => self.api.put_empty(&self.paths.item(*id), body).await,
        }
    }

    /// DELETE after interactive confirmation, then reload.
    ///
    /// Returns `Ok(None)` without touching the network when the user declines.
    pub async fn delete(
        &self,
        id: i64,
        confirm: &dyn Confirm,
        prompt: &str,
    ) -> Result<Option<Vec<T>>> {
        if !self.remove(id, confirm, prompt).await? {
            return Ok(None);
        }
        self.list().await.map(Some)
    }

    /// Confirmed DELETE without the reload. `Ok(false)` when declined.
    pub async fn remove(&self, id: i64, confirm: &dyn Confirm, prompt: &str) -> Result<bool> {
        if !confirm.confirm(prompt) {
            tracing::debug!(id, "Deletion declined");
            return Ok(false);
        }
        self.api.delete(&self.paths.item(id)).await?;
        Ok(true)
    }
}

/// View-held copy of a list
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> ListState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Replace the held list with a fresh fetch
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
