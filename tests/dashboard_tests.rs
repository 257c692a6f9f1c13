//! Dashboard services and views against a scripted backend.

mod common;

use common::mocks::{client, MockTransport};
use common::{client_json, developer_json, project_json, task_json};
use serde_json::json;
use std::sync::Arc;
use teamsync::dashboard::{
    AdminService, AdminTab, AdminView, DeveloperService, DeveloperView, Phase, UserService,
    UserView,
};
use teamsync::filter::ProjectTab;
use teamsync::forms::FormMode;
use teamsync::tasks::TaskToggle;
use teamsync::types::{AppError, ProjectStatus};
use teamsync::Method;

fn script_admin(mock: &MockTransport) {
    mock.on(
        Method::Get,
        "/api/admin/profile",
        200,
        json!({
            "id": 1,
            "name": "ann",
            "email": "ann@example.com",
            "phone": "1",
            "totalProjects": 2,
            "totalClients": 1,
            "totalDevelopers": 1,
            "completedProjects": 1
        }),
    );
    mock.on(
        Method::Get,
        "/api/projects",
        200,
        json!([
            project_json(1, "Portal", "ONGOING"),
            project_json(2, "Billing", "COMPLETED")
        ]),
    );
    mock.on(Method::Get, "/api/admin/clients", 200, json!([client_json(90, "Acme")]));
    mock.on(
        Method::Get,
        "/api/admin/developers",
        200,
        json!([developer_json(4, "Dev")]),
    );
}

#[tokio::test]
async fn test_admin_initial_load() {
    let mock = MockTransport::new();
    script_admin(&mock);
    let service = AdminService::new(client(&mock, "tok"));

    let mut view = AdminView::new();
    assert!(view.is_loading());
    view.finish_initial_load(service.load().await);

    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.display_name(), "ann");
    assert_eq!(view.avatar_initial(), "A");
    assert_eq!(view.stats().projects, 2);
    assert_eq!(view.stats().completed, 1);
    assert_eq!(view.clients.len(), 1);
    assert_eq!(view.developers.len(), 1);

    view.set_tab(AdminTab::Completed);
    let titles: Vec<String> = view.filtered_projects().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Billing"]);

    for request in mock.requests() {
        assert_eq!(request.header("authorization"), Some("Bearer tok"));
    }
}

#[tokio::test]
async fn test_admin_load_keeps_going_after_a_failure() {
    let mock = MockTransport::new();
    mock.on(Method::Get, "/api/projects", 200, json!([project_json(1, "Portal", "ONGOING")]));
    mock.on(Method::Get, "/api/admin/clients", 500, json!({"message": "boom"}));
    mock.on(Method::Get, "/api/admin/developers", 200, json!([]));
    let service = AdminService::new(client(&mock, "tok"));

    let mut view = AdminView::new();
    view.finish_initial_load(service.load().await);

    assert_eq!(view.phase, Phase::Ready);
    assert!(view.profile.is_none());
    assert!(view.clients.is_empty());
    assert_eq!(view.projects.len(), 1);
    // counters fall back to the lists when the profile is missing
    assert_eq!(view.stats().projects, 1);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let mock = MockTransport::new();
    script_admin(&mock);
    let service = AdminService::new(client(&mock, "tok"));

    let result = service.delete_project(1, &|_: &str| false).await.unwrap();
    assert!(result.is_none());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_confirmed_delete_reloads_list() {
    let mock = MockTransport::new();
    mock.on_raw(Method::Delete, "/api/admin/developers/4", 200, "");
    mock.on(Method::Get, "/api/admin/developers", 200, json!([]));
    let service = AdminService::new(client(&mock, "tok"));

    let confirm = |prompt: &str| {
        assert_eq!(prompt, "Delete developer?");
        true
    };
    let developers = service.delete_developer(4, &confirm).await.unwrap();

    assert_eq!(developers, Some(vec![]));
    assert_eq!(
        mock.calls(),
        vec!["DELETE /api/admin/developers/4", "GET /api/admin/developers"]
    );
}

#[tokio::test]
async fn test_project_modal_create_then_edit() {
    let mock = MockTransport::new();
    script_admin(&mock);
    mock.on_raw(Method::Post, "/api/admin/projects", 201, "");
    mock.on_raw(Method::Put, "/api/projects/1", 200, "");
    let service = AdminService::new(client(&mock, "tok"));

    let mut view = AdminView::new();
    view.finish_initial_load(service.load().await);

    // create
    view.project_modal.open_create();
    assert_eq!(view.project_modal.mode(), FormMode::Create);
    view.project_modal.form.title = "Mobile".into();
    view.project_modal.form.description = "App".into();
    view.project_modal.form.client_id = Some(90);
    view.project_modal.form.toggle_developer(4);
    let submission = view.project_modal.submission().unwrap();
    view.projects
        .replace(service.submit_project(&submission).await.unwrap());
    view.project_modal.close();

    let body = mock.last_body(Method::Post, "/api/admin/projects").unwrap();
    assert_eq!(body["title"], "Mobile");
    assert_eq!(body["clientId"], 90);
    assert_eq!(body["developerIds"], json!([4]));
    assert!(!view.project_modal.is_open());

    // edit
    let existing = view.projects.find(1).cloned().unwrap();
    view.project_modal.open_edit(existing);
    assert_eq!(view.project_modal.mode(), FormMode::Edit(1));
    assert_eq!(view.project_modal.form.title, "Portal");
    view.project_modal.form.status = ProjectStatus::Completed;
    let submission = view.project_modal.submission().unwrap();
    service.submit_project(&submission).await.unwrap();

    let body = mock.last_body(Method::Put, "/api/projects/1").unwrap();
    assert_eq!(body["status"], "COMPLETED");
}

#[tokio::test]
async fn test_modal_rejects_blank_fields_without_request() {
    let mock = MockTransport::new();
    let mut view = AdminView::new();
    view.client_modal.open_create();
    view.client_modal.form.name = "Acme".into();

    let err = view.client_modal.submission().unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(err.to_string().contains("email"));
    assert!(view.client_modal.is_open());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_admin_profile_update_refetches() {
    let mock = MockTransport::new();
    script_admin(&mock);
    mock.on_raw(Method::Put, "/api/profile/update", 200, "");
    let service = AdminService::new(client(&mock, "tok"));

    let mut view = AdminView::new();
    view.finish_initial_load(service.load().await);
    view.open_profile_editor();
    assert_eq!(view.profile_modal.form.email, "ann@example.com");
    view.profile_modal.form.phone = "2".into();

    let body = view.profile_modal.submission().unwrap().into_body();
    let profile = service.update_profile(&body).await.unwrap();
    assert_eq!(profile.name, "ann");

    let calls = mock.calls();
    assert_eq!(calls[calls.len() - 2], "PUT /api/profile/update");
    assert_eq!(calls[calls.len() - 1], "GET /api/admin/profile");
}

fn script_developer(mock: &MockTransport) {
    mock.on(Method::Get, "/api/developer/profile", 200, developer_json(4, "Dev"));
    mock.on(
        Method::Get,
        "/api/projects/developer",
        200,
        json!([
            project_json(1, "Portal", "ONGOING"),
            project_json(2, "Billing", "COMPLETED")
        ]),
    );
}

#[tokio::test]
async fn test_developer_task_round_trip() {
    let mock = MockTransport::new();
    script_developer(&mock);
    mock.on(
        Method::Get,
        "/api/tasks/project/1",
        200,
        json!([task_json(5, "Wireframes", false)]),
    );
    mock.on(
        Method::Get,
        "/api/tasks/project/1",
        200,
        json!([task_json(5, "Wireframes", true)]),
    );
    mock.on_raw(Method::Put, "/api/tasks/5", 200, "");
    let service = DeveloperService::new(client(&mock, "tok"), TaskToggle::FullUpdate);

    let mut view = DeveloperView::new();
    view.finish_initial_load(service.load().await);
    assert_eq!(view.stats(), (1, 1));
    assert_eq!(view.display_name(), "Dev");

    let project = view.projects.find(1).cloned().unwrap();
    view.open_project(project);
    assert!(view.tasks_loading);
    view.finish_tasks(service.tasks(1).await);
    assert!(!view.tasks_loading);
    assert_eq!(view.completion(), 0);

    let task = view.tasks.find(5).cloned().unwrap();
    assert!(view.apply_tasks(1, service.toggle_task(1, &task).await.unwrap()));

    assert_eq!(
        mock.last_body(Method::Put, "/api/tasks/5"),
        Some(json!({"title": "Wireframes", "completed": true}))
    );
    assert!(view.tasks.find(5).unwrap().completed);
    assert_eq!(view.completion(), 100);
}

#[tokio::test]
async fn test_developer_inline_task_uses_own_id() {
    let mock = MockTransport::new();
    script_developer(&mock);
    mock.on_raw(Method::Post, "/api/tasks", 201, "");
    mock.on(Method::Get, "/api/tasks/project/1", 200, json!([]));
    let service = DeveloperService::new(client(&mock, "tok"), TaskToggle::FullUpdate);

    let mut view = DeveloperView::new();
    view.finish_initial_load(service.load().await);
    assert!(view.task_submission().is_err());

    let project = view.projects.find(1).cloned().unwrap();
    view.open_project(project);
    view.draft.title = "Review".into();
    view.draft.description = "Code review".into();
    let submission = view.task_submission().unwrap();
    assert!(view.apply_tasks(1, service.add_task(&submission).await.unwrap()));
    view.clear_draft();

    let body = mock.last_body(Method::Post, "/api/tasks").unwrap();
    assert_eq!(body["projectId"], 1);
    assert_eq!(body["developerId"], 4);
    assert!(view.draft.title.is_empty());
}

#[tokio::test]
async fn test_user_dashboard_tabs() {
    let mock = MockTransport::new();
    mock.on(
        Method::Get,
        "/api/projects",
        200,
        json!([
            project_json(1, "Portal", "ONGOING"),
            project_json(2, "Billing", "COMPLETED"),
            project_json(3, "Search", "ONGOING")
        ]),
    );
    let service = UserService::new(client(&mock, "tok"));

    let mut view = UserView::new();
    view.finish_initial_load(service.load().await);

    view.set_tab(ProjectTab::Ongoing);
    let ids: Vec<i64> = view.filtered_projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(view.heading(), "Ongoing Projects");
}

#[tokio::test]
async fn test_user_dashboard_unauthorized_leaves_empty_list() {
    let mock = MockTransport::new();
    mock.on(Method::Get, "/api/projects", 401, json!({"error": "Unauthorized"}));
    let service = UserService::new(client(&mock, ""));

    let err = service.projects().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Request failed with status 401: Unauthorized");

    let mut view = UserView::new();
    view.finish_initial_load(service.load().await);
    assert!(!view.is_loading());
    assert!(view.filtered_projects().is_empty());
    assert!(mock.requests()[0].header("authorization").is_none());
}

#[tokio::test]
async fn test_overlapping_requests_share_one_indicator() {
    let mock = MockTransport::new();
    script_admin(&mock);
    let api = client(&mock, "tok");
    let tracker = api.tracker().clone();
    mock.probe(&tracker);

    let events = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = events.clone();
    tracker.subscribe(move |loading| sink.lock().push(loading));

    AdminService::new(api).load().await;

    assert_eq!(mock.observed().into_iter().max(), Some(4));
    assert!(!tracker.is_loading());
    assert_eq!(*events.lock(), vec![true, false]);
}
