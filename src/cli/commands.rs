//! Command handlers for the terminal client
//!
//! Each dashboard command passes the route guard first, then drives the same
//! service/view pair the browser UI uses.

use super::output::Output;
use super::store::FileStore;
use super::{AdminAction, Commands, ProjectAction};
use crate::api::{ApiClient, Transport};
use crate::auth::AuthService;
use crate::config::ClientConfig;
use crate::dashboard::user::{client_label, EMPTY_MESSAGE};
use crate::dashboard::{
    AdminService, AdminTab, AdminView, DeveloperService, DeveloperView, UserService, UserView,
};
use crate::filter::ProjectTab;
use crate::guard::{GuardOutcome, Route, RouteGuard, LOGIN_PATH};
use crate::loader::RequestTracker;
use crate::project_detail::{
    assignee_label, ProjectDetailService, ProjectDetailView, NOT_FOUND_MESSAGE,
};
use crate::session::Session;
use crate::types::{RegisterRequest, Role, UserAccount};
use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::{Confirm, Password};
use std::sync::Arc;

/// Everything a command needs
pub struct Context {
    pub config: ClientConfig,
    pub api: ApiClient,
    pub guard: RouteGuard,
    pub output: Output,
    /// Skip confirmation prompts
    pub assume_yes: bool,
}

impl Context {
    /// Build a context whose session lives in the configured session file
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        output: Output,
        assume_yes: bool,
    ) -> Self {
        let store = FileStore::open(&config.session_file);
        let session = Session::with_key(Arc::new(store), &config.token_key);
        Self::with_session(config, transport, session, output, assume_yes)
    }

    pub fn with_session(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        session: Session,
        output: Output,
        assume_yes: bool,
    ) -> Self {
        let tracker = RequestTracker::new();
        tracker.subscribe(|loading| tracing::trace!(loading, "Request activity changed"));
        let api = ApiClient::new(&config.api_base, transport, session).with_tracker(tracker);
        Self {
            guard: RouteGuard::new(config.role_policy),
            config,
            api,
            output,
            assume_yes,
        }
    }

    fn session(&self) -> &Session {
        self.api.session()
    }

    /// Fail with a hint instead of rendering a guarded page
    fn ensure(&self, route: Route) -> Result<()> {
        match self.guard.check_route(self.session(), route) {
            GuardOutcome::Render => Ok(()),
            GuardOutcome::Redirect(path) if path == LOGIN_PATH => {
                bail!("Not signed in. Run `teamsync login <email>` first.")
            }
            GuardOutcome::Redirect(path) => {
                bail!("Access denied. Your dashboard is `teamsync {}`.", command_for(&path))
            }
        }
    }

    /// Confirmation callback for deletes
    fn confirmer(&self) -> impl Fn(&str) -> bool {
        let assume_yes = self.assume_yes;
        move |prompt: &str| {
            assume_yes
                || Confirm::new()
                    .with_prompt(prompt)
                    .default(false)
                    .interact()
                    .unwrap_or(false)
        }
    }
}

/// Subcommand name for a dashboard path
fn command_for(path: &str) -> &str {
    path.trim_start_matches('/')
}

fn read_password(given: Option<String>) -> Result<String> {
    match given {
        Some(password) => Ok(password),
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password"),
    }
}

pub async fn run(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Login { email, password } => login(ctx, &email, password).await,
        Commands::Register {
            name,
            email,
            phone,
            role,
            password,
        } => {
            let role = Role::parse(&role).ok_or_else(|| anyhow!("Unknown role: {}", role))?;
            let request = RegisterRequest {
                name,
                email,
                phone,
                password: read_password(password)?,
                role,
            };
            register(ctx, request).await
        }
        Commands::Logout => {
            AuthService::new(ctx.api.clone()).logout();
            ctx.output.success("Signed out");
            Ok(())
        }
        Commands::Admin { tab, action } => match action {
            Some(action) => admin_action(ctx, action).await,
            None => admin(ctx, &tab).await,
        },
        Commands::Developer { project } => developer(ctx, project).await,
        Commands::User { tab } => user(ctx, &tab).await,
        Commands::Project { action } => project(ctx, action).await,
    }
}

async fn login(ctx: &Context, email: &str, password: Option<String>) -> Result<()> {
    let password = read_password(password)?;
    AuthService::new(ctx.api.clone())
        .login(email, &password)
        .await
        .context("Login failed")?;
    ctx.output.success("Signed in");
    ctx.output.hint(&format!(
        "Open your dashboard with `teamsync {}`",
        command_for(ctx.session().landing_path())
    ));
    Ok(())
}

async fn register(ctx: &Context, request: RegisterRequest) -> Result<()> {
    let missing: Vec<&str> = [
        ("name", request.name.trim()),
        ("email", request.email.trim()),
        ("phone", request.phone.trim()),
        ("password", request.password.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();
    if !missing.is_empty() {
        bail!("Fill all fields: {}", missing.join(", "));
    }

    AuthService::new(ctx.api.clone())
        .register(&request)
        .await
        .context("Registration failed")?;
    ctx.output.success("Account created");
    ctx.output
        .hint(&format!("Sign in with `teamsync login {}`", request.email));
    Ok(())
}

async fn admin(ctx: &Context, tab: &str) -> Result<()> {
    ctx.ensure(Route::Admin)?;
    let tab = AdminTab::parse(tab).ok_or_else(|| anyhow!("Unknown tab: {}", tab))?;

    let mut view = AdminView::new();
    view.finish_initial_load(AdminService::new(ctx.api.clone()).load().await);
    view.set_tab(tab);

    let out = &ctx.output;
    out.header(&format!("Admin Dashboard  {}", view.display_name()));
    let stats = view.stats();
    out.kv("Projects", &stats.projects.to_string());
    out.kv("Clients", &stats.clients.to_string());
    out.kv("Developers", &stats.developers.to_string());
    out.kv("Completed", &stats.completed.to_string());

    let labels: Vec<&str> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    out.newline();
    out.tabs(&labels, view.tab.label());
    out.subheader(view.tab.label());

    match view.tab {
        AdminTab::Clients => print_accounts(out, view.clients.items()),
        AdminTab::Developers => print_accounts(out, view.developers.items()),
        _ => {
            let projects = view.filtered_projects();
            if projects.is_empty() {
                out.info(EMPTY_MESSAGE);
            }
            for project in &projects {
                out.project(project, client_label(project));
            }
        }
    }
    Ok(())
}

fn print_accounts(out: &Output, accounts: &[UserAccount]) {
    if accounts.is_empty() {
        out.info("Nothing here yet");
        return;
    }
    out.table_header(&["ID", "Name", "Email", "Phone"]);
    for account in accounts {
        let id = account.id.to_string();
        out.table_row(&[
            id.as_str(),
            account.name.as_str(),
            account.email.as_str(),
            account.phone.as_str(),
        ]);
    }
}

async fn admin_action(ctx: &Context, action: AdminAction) -> Result<()> {
    ctx.ensure(Route::Admin)?;
    let service = AdminService::new(ctx.api.clone());
    let confirm = ctx.confirmer();

    let remaining = match action {
        AdminAction::DeleteProject { id } => service
            .delete_project(id, &confirm)
            .await?
            .map(|list| list.len()),
        AdminAction::DeleteDeveloper { id } => service
            .delete_developer(id, &confirm)
            .await?
            .map(|list| list.len()),
        AdminAction::DeleteClient { id } => service
            .delete_client(id, &confirm)
            .await?
            .map(|list| list.len()),
    };

    match remaining {
        Some(count) => ctx
            .output
            .success(&format!("Deleted ({} remaining)", count)),
        None => ctx.output.info("Cancelled"),
    }
    Ok(())
}

async fn developer(ctx: &Context, project_id: Option<i64>) -> Result<()> {
    ctx.ensure(Route::Developer)?;
    let service = DeveloperService::new(ctx.api.clone(), ctx.config.task_toggle);

    let mut view = DeveloperView::new();
    view.finish_initial_load(service.load().await);

    let out = &ctx.output;
    out.header(&format!("Developer Dashboard  {}", view.display_name()));
    let (ongoing, completed) = view.stats();
    out.kv("Ongoing", &ongoing.to_string());
    out.kv("Completed", &completed.to_string());

    out.subheader("Assigned Projects");
    if view.projects.is_empty() {
        out.info(EMPTY_MESSAGE);
    }
    for project in view.projects.items() {
        out.project(project, client_label(project));
    }

    let Some(project_id) = project_id else {
        return Ok(());
    };
    let project = view
        .projects
        .find(project_id)
        .cloned()
        .ok_or_else(|| anyhow!("Project {} is not assigned to you", project_id))?;

    view.open_project(project);
    view.finish_tasks(service.tasks(project_id).await);

    if let Some(active) = &view.active_project {
        out.subheader(&active.title);
    }
    out.progress(view.completion());
    for task in view.tasks.items() {
        out.task(task, assignee_label(task));
    }
    Ok(())
}

async fn user(ctx: &Context, tab: &str) -> Result<()> {
    ctx.ensure(Route::User)?;
    let tab = ProjectTab::parse(tab).ok_or_else(|| anyhow!("Unknown tab: {}", tab))?;

    let mut view = UserView::new();
    view.finish_initial_load(UserService::new(ctx.api.clone()).load().await);
    view.set_tab(tab);

    let out = &ctx.output;
    out.header(view.heading());
    out.info(view.caption());
    let projects = view.filtered_projects();
    if projects.is_empty() {
        out.info(EMPTY_MESSAGE);
    }
    for project in &projects {
        out.project(project, client_label(project));
    }
    Ok(())
}

async fn project(ctx: &Context, action: ProjectAction) -> Result<()> {
    let id = match &action {
        ProjectAction::Show { id }
        | ProjectAction::Toggle { id, .. }
        | ProjectAction::AddTask { id, .. }
        | ProjectAction::DeleteTask { id, .. } => *id,
    };
    ctx.ensure(Route::AdminProject(id))?;

    let service = ProjectDetailService::new(
        ctx.api.clone(),
        id,
        ctx.config.project_lookup,
        ctx.config.task_toggle,
    );
    let mut view = ProjectDetailView::new(id);

    match action {
        ProjectAction::Show { .. } => {
            view.apply(service.load().await);
        }
        ProjectAction::Toggle { task, .. } => {
            view.apply(service.load().await);
            let target = view
                .tasks
                .find(task)
                .cloned()
                .ok_or_else(|| anyhow!("Task {} not found in project {}", task, id))?;
            view.apply(service.toggle_task(&target).await?);
        }
        ProjectAction::AddTask {
            title,
            description,
            developer,
            ..
        } => {
            view.apply(service.load().await);
            if view.is_not_found() {
                bail!(NOT_FOUND_MESSAGE);
            }
            if !view.developers().iter().any(|d| d.id == developer) {
                bail!("Developer {} is not assigned to this project", developer);
            }
            view.open_task_modal();
            view.task_modal.form.title = title;
            view.task_modal.form.description = description;
            view.task_modal.form.developer_id = Some(developer);
            let submission = view.task_modal.submission()?;
            view.apply(service.add_task(&submission).await?);
            view.task_modal.close();
            ctx.output.success("Task added");
        }
        ProjectAction::DeleteTask { task, .. } => {
            let confirm = ctx.confirmer();
            match service.delete_task(task, &confirm).await? {
                Some(data) => {
                    view.apply(data);
                    ctx.output.success("Task deleted");
                }
                None => {
                    ctx.output.info("Cancelled");
                    return Ok(());
                }
            }
        }
    }

    print_project_detail(&ctx.output, &view)
}

fn print_project_detail(out: &Output, view: &ProjectDetailView) -> Result<()> {
    let project = view
        .project
        .as_ref()
        .ok_or_else(|| anyhow!(NOT_FOUND_MESSAGE))?;

    out.header(&project.title);
    out.kv("Status", project.status.as_str());
    out.kv("Client", client_label(project));
    if !project.description.is_empty() {
        out.kv("Description", &project.description);
    }
    let team: Vec<&str> = project.developers.iter().map(|d| d.name.as_str()).collect();
    out.kv("Developers", &team.join(", "));

    out.subheader("Completion");
    out.progress(view.completion);

    out.subheader("Tasks");
    if view.tasks.is_empty() {
        out.info("No tasks yet");
    }
    for task in view.tasks.items() {
        out.task(task, assignee_label(task));
    }
    Ok(())
}
