//! Project detail page against a scripted backend.

mod common;

use common::mocks::{client, MockTransport};
use common::{project_json, task_json};
use rstest::rstest;
use serde_json::json;
use teamsync::project_detail::{ProjectDetailService, ProjectDetailView, ProjectLookup};
use teamsync::tasks::TaskToggle;
use teamsync::Method;

fn service(mock: &std::sync::Arc<MockTransport>, toggle: TaskToggle) -> ProjectDetailService {
    ProjectDetailService::new(client(mock, "tok"), 12, ProjectLookup::default(), toggle)
}

fn script_project_list(mock: &MockTransport) {
    mock.on(
        Method::Get,
        "/api/admin/projects",
        200,
        json!([project_json(3, "Other", "ONGOING"), project_json(12, "Portal", "ONGOING")]),
    );
}

#[tokio::test]
async fn test_load_project_tasks_and_completion() {
    let mock = MockTransport::new();
    script_project_list(&mock);
    mock.on(
        Method::Get,
        "/api/tasks/project/12",
        200,
        json!([task_json(5, "Wireframes", true), task_json(6, "Copy", false)]),
    );
    mock.on(Method::Get, "/api/tasks/project/12/completion", 200, json!(50));

    let mut view = ProjectDetailView::new(12);
    assert!(view.is_loading());
    view.apply(service(&mock, TaskToggle::FullUpdate).load().await);

    assert!(!view.is_loading());
    assert!(!view.is_not_found());
    assert_eq!(view.project.as_ref().unwrap().title, "Portal");
    assert_eq!(view.tasks.len(), 2);
    assert_eq!(view.completion, 50);
    assert_eq!(
        mock.calls(),
        vec![
            "GET /api/admin/projects",
            "GET /api/tasks/project/12",
            "GET /api/tasks/project/12/completion"
        ]
    );
}

#[rstest]
#[case::bare_number(json!(33.4), 33)]
#[case::object(json!({"completion": 75}), 75)]
#[case::percentage_key(json!({"percentage": 66.6}), 67)]
#[case::over_range(json!(140), 100)]
#[case::unrecognised(json!({"done": 3}), 0)]
#[tokio::test]
async fn test_completion_body_shapes(#[case] body: serde_json::Value, #[case] expected: u8) {
    let mock = MockTransport::new();
    mock.on(Method::Get, "/api/tasks/project/12/completion", 200, body);

    let data = service(&mock, TaskToggle::FullUpdate).load().await;
    assert_eq!(data.completion, expected);
}

#[tokio::test]
async fn test_completion_failure_reads_zero() {
    let mock = MockTransport::new();
    script_project_list(&mock);
    mock.on(Method::Get, "/api/tasks/project/12", 200, json!([]));
    mock.on(
        Method::Get,
        "/api/tasks/project/12/completion",
        500,
        json!({"message": "boom"}),
    );

    let mut view = ProjectDetailView::new(12);
    view.apply(service(&mock, TaskToggle::FullUpdate).load().await);
    assert_eq!(view.completion, 0);
    assert!(view.project.is_some());
}

#[tokio::test]
async fn test_missing_project_is_not_found() {
    let mock = MockTransport::new();

    let mut view = ProjectDetailView::new(12);
    view.apply(service(&mock, TaskToggle::FullUpdate).load().await);
    assert!(view.is_not_found());
    assert!(view.tasks.is_empty());
}

#[tokio::test]
async fn test_scan_lookup_finds_project_in_admin_list() {
    let mock = MockTransport::new();
    mock.on(
        Method::Get,
        "/api/admin/projects",
        200,
        json!([project_json(3, "Other", "ONGOING"), project_json(12, "Portal", "COMPLETED")]),
    );

    let project = service(&mock, TaskToggle::FullUpdate).project().await.unwrap().unwrap();
    assert_eq!(project.title, "Portal");
    assert!(!mock.calls().contains(&"GET /api/projects/12".to_string()));
}

#[tokio::test]
async fn test_scan_lookup_missing_id_is_none() {
    let mock = MockTransport::new();
    mock.on(Method::Get, "/api/admin/projects", 200, json!([project_json(3, "Other", "ONGOING")]));

    assert!(service(&mock, TaskToggle::FullUpdate).project().await.unwrap().is_none());
}

#[tokio::test]
async fn test_direct_lookup_fetches_single_project() {
    let mock = MockTransport::new();
    mock.on(Method::Get, "/api/projects/12", 200, project_json(12, "Portal", "ONGOING"));
    let service = ProjectDetailService::new(
        client(&mock, "tok"),
        12,
        ProjectLookup::Direct,
        TaskToggle::FullUpdate,
    );

    let project = service.project().await.unwrap().unwrap();
    assert_eq!(project.title, "Portal");
    assert_eq!(mock.calls(), vec!["GET /api/projects/12"]);

    let missing = ProjectDetailService::new(
        client(&mock, "tok"),
        99,
        ProjectLookup::Direct,
        TaskToggle::FullUpdate,
    );
    assert!(missing.project().await.unwrap().is_none());
}

#[tokio::test]
async fn test_toggle_full_update_then_reload() {
    let mock = MockTransport::new();
    script_project_list(&mock);
    mock.on(
        Method::Get,
        "/api/tasks/project/12",
        200,
        json!([task_json(5, "Wireframes", false)]),
    );
    mock.on(
        Method::Get,
        "/api/tasks/project/12",
        200,
        json!([task_json(5, "Wireframes", true)]),
    );
    mock.on(Method::Get, "/api/tasks/project/12/completion", 200, json!(0));
    mock.on(Method::Get, "/api/tasks/project/12/completion", 200, json!(100));
    mock.on_raw(Method::Put, "/api/tasks/5", 200, "");
    let service = service(&mock, TaskToggle::FullUpdate);

    let mut view = ProjectDetailView::new(12);
    view.apply(service.load().await);
    let task = view.tasks.find(5).cloned().unwrap();
    assert!(!task.completed);

    view.apply(service.toggle_task(&task).await.unwrap());

    assert_eq!(
        mock.last_body(Method::Put, "/api/tasks/5"),
        Some(json!({"title": "Wireframes", "completed": true}))
    );
    assert!(view.tasks.find(5).unwrap().completed);
    assert_eq!(view.completion, 100);
}

#[tokio::test]
async fn test_mutation_reloads_task_list_once() {
    let mock = MockTransport::new();
    script_project_list(&mock);
    mock.on(
        Method::Get,
        "/api/tasks/project/12",
        200,
        json!([task_json(5, "Wireframes", false)]),
    );
    mock.on(Method::Get, "/api/tasks/project/12/completion", 200, json!(0));
    mock.on_raw(Method::Put, "/api/tasks/5", 200, "");
    let service = service(&mock, TaskToggle::FullUpdate);

    let task: teamsync::types::Task = serde_json::from_value(task_json(5, "Wireframes", false)).unwrap();
    service.toggle_task(&task).await.unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            "PUT /api/tasks/5",
            "GET /api/admin/projects",
            "GET /api/tasks/project/12",
            "GET /api/tasks/project/12/completion"
        ]
    );
}

#[tokio::test]
async fn test_mutation_succeeds_when_reload_fails() {
    let mock = MockTransport::new();
    mock.on_raw(Method::Put, "/api/tasks/5", 200, "");
    let service = service(&mock, TaskToggle::FullUpdate);

    let task: teamsync::types::Task = serde_json::from_value(task_json(5, "Wireframes", false)).unwrap();
    let data = service.toggle_task(&task).await.unwrap();

    assert!(data.project.is_none());
    assert!(data.tasks.is_empty());
    let task_reloads = mock
        .calls()
        .iter()
        .filter(|c| c.as_str() == "GET /api/tasks/project/12")
        .count();
    assert_eq!(task_reloads, 1);
}

#[tokio::test]
async fn test_toggle_via_complete_endpoint() {
    let mock = MockTransport::new();
    mock.on_raw(Method::Put, "/api/tasks/5/complete", 200, "");
    let service = service(&mock, TaskToggle::CompleteEndpoint);

    let task: teamsync::types::Task = serde_json::from_value(task_json(5, "Wireframes", true)).unwrap();
    service.toggle_task(&task).await.unwrap();

    assert_eq!(
        mock.last_body(Method::Put, "/api/tasks/5/complete"),
        Some(json!({"completed": false}))
    );
}

#[tokio::test]
async fn test_add_task_from_modal() {
    let mock = MockTransport::new();
    script_project_list(&mock);
    mock.on(Method::Get, "/api/tasks/project/12", 200, json!([]));
    mock.on_raw(Method::Post, "/api/tasks", 201, "");
    let service = service(&mock, TaskToggle::FullUpdate);

    let mut view = ProjectDetailView::new(12);
    view.apply(service.load().await);
    view.open_task_modal();
    view.task_modal.form.title = "Launch".into();
    view.task_modal.form.description = "Go live".into();

    // assignee is required
    assert!(view.task_modal.submission().is_err());

    view.task_modal.form.developer_id = view.developers().first().map(|d| d.id);
    let submission = view.task_modal.submission().unwrap();
    view.apply(service.add_task(&submission).await.unwrap());
    view.task_modal.close();

    let body = mock.last_body(Method::Post, "/api/tasks").unwrap();
    assert_eq!(
        body,
        json!({"title": "Launch", "description": "Go live", "projectId": 12, "developerId": 4})
    );
    assert!(!view.task_modal.is_open());
}

#[tokio::test]
async fn test_delete_task_asks_first() {
    let mock = MockTransport::new();
    mock.on_raw(Method::Delete, "/api/tasks/5", 200, "");
    let service = service(&mock, TaskToggle::FullUpdate);

    assert!(service.delete_task(5, &|_: &str| false).await.unwrap().is_none());
    assert!(mock.calls().is_empty());

    let data = service
        .delete_task(5, &|prompt: &str| prompt == "Delete this task?")
        .await
        .unwrap();
    assert!(data.is_some());
    assert_eq!(mock.calls()[0], "DELETE /api/tasks/5");
}
