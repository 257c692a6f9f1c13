//! Task operations shared by the developer dashboard and the project detail view

use crate::api::{routes, ApiClient};
use crate::resource::{Confirm, ResourcePaths, Submission, TaskResource};
use crate::types::{Result, Task, TaskCompletion, TaskRequest, TaskUpdate};
use serde::Deserialize;

pub const DELETE_TASK_PROMPT: &str = "Delete this task?";

/// How a completion toggle is sent to the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskToggle {
    /// `PUT /api/tasks/{id}` with the full title and the flipped flag
    #[default]
    FullUpdate,
    /// `PUT /api/tasks/{id}/complete`
    CompleteEndpoint,
}

/// Share of completed tasks, rounded to a whole percent. Empty lists are 0%.
pub fn completion_percent(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.completed).count();
    ((done as f64 / tasks.len() as f64) * 100.0).round() as u8
}

#[derive(Clone)]
pub struct TaskService {
    api: ApiClient,
    toggle: TaskToggle,
}

impl TaskService {
    pub fn new(api: ApiClient, toggle: TaskToggle) -> Self {
        Self { api, toggle }
    }

    fn resource(&self, project_id: i64) -> TaskResource {
        TaskResource::new(self.api.clone(), ResourcePaths::project_tasks(project_id))
    }

    pub async fn list(&self, project_id: i64) -> Result<Vec<Task>> {
        self.resource(project_id).list().await
    }

    /// Backend-computed completion. Any failure reads as 0.
    pub async fn completion(&self, project_id: i64) -> u8 {
        match self
            .api
            .get::<serde_json::Value>(&routes::project_completion(project_id))
            .await
        {
            Ok(value) => parse_completion(&value).unwrap_or_else(|| {
                tracing::debug!(project_id, %value, "Unrecognised completion body");
                0
            }),
            Err(e) => {
                tracing::debug!(project_id, error = %e, "Completion unavailable, using 0");
                0
            }
        }
    }

    pub async fn create(&self, submission: &Submission<TaskRequest>) -> Result<Vec<Task>> {
        let project_id = self.send(submission).await?;
        self.list(project_id).await
    }

    /// POST or PUT the task without reloading. Returns the task's project id.
    pub async fn send(&self, submission: &Submission<TaskRequest>) -> Result<i64> {
        let project_id = match submission {
            Submission::Create(body) | Submission::Update(_, body) => body.project_id,
        };
        self.resource(project_id).send(submission).await?;
        Ok(project_id)
    }

    /// Flip `task.completed`, then reload the project's tasks
    pub async fn toggle(&self, project_id: i64, task: &Task) -> Result<Vec<Task>> {
        self.send_toggle(task).await?;
        self.list(project_id).await
    }

    /// Flip `task.completed` without reloading
    pub async fn send_toggle(&self, task: &Task) -> Result<()> {
        let completed = !task.completed;
        match self.toggle {
            TaskToggle::FullUpdate => {
                let body = TaskUpdate {
                    title: task.title.clone(),
                    completed,
                };
                self.api.put_empty(&routes::task(task.id), &body).await
            }
            TaskToggle::CompleteEndpoint => {
                self.api
                    .put_empty(&routes::task_complete(task.id), &TaskCompletion { completed })
                    .await
            }
        }
    }

    pub async fn delete(
        &self,
        project_id: i64,
        task_id: i64,
        confirm: &dyn Confirm,
    ) -> Result<Option<Vec<Task>>> {
        self.resource(project_id)
            .delete(task_id, confirm, DELETE_TASK_PROMPT)
            .await
    }

    /// Confirmed delete without reloading. `Ok(false)` when declined.
    pub async fn remove(&self, project_id: i64, task_id: i64, confirm: &dyn Confirm) -> Result<bool> {
        self.resource(project_id)
            .remove(task_id, confirm, DELETE_TASK_PROMPT)
            .await
    }
}

fn parse_completion(value: &serde_json::Value) -> Option<u8> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::Object(map) => ["completion", "percentage", "percent"]
            .iter()
            .find_map(|k| map.get(*k).and_then(|v| v.as_f64())),
        _ => None,
    }?;
    Some(number.round().clamp(0.0, 100.0) as u8)
}
