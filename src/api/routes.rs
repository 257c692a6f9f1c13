//! Backend endpoint paths

// ============= Auth =============

pub const LOGIN: &str = "/api/auth/login";
pub const REGISTER: &str = "/api/auth/register";

// ============= Profiles =============

pub const ADMIN_PROFILE: &str = "/api/admin/profile";
pub const DEVELOPER_PROFILE: &str = "/api/developer/profile";
pub const PROFILE_UPDATE: &str = "/api/profile/update";

// ============= Projects =============

pub const PROJECTS: &str = "/api/projects";
pub const ADMIN_PROJECTS: &str = "/api/admin/projects";
pub const DEVELOPER_PROJECTS: &str = "/api/projects/developer";

pub fn project(id: i64) -> String {
    format!("{}/{}", PROJECTS, id)
}

// ============= Accounts =============

pub const ADMIN_DEVELOPERS: &str = "/api/admin/developers";
pub const ADMIN_CLIENTS: &str = "/api/admin/clients";

pub fn admin_developer(id: i64) -> String {
    format!("{}/{}", ADMIN_DEVELOPERS, id)
}

pub fn admin_client(id: i64) -> String {
    format!("{}/{}", ADMIN_CLIENTS, id)
}

// ============= Tasks =============

pub const TASKS: &str = "/api/tasks";

pub fn task(id: i64) -> String {
    format!("{}/{}", TASKS, id)
}

pub fn task_complete(id: i64) -> String {
    format!("{}/{}/complete", TASKS, id)
}

pub fn project_tasks(project_id: i64) -> String {
    format!("{}/project/{}", TASKS, project_id)
}

pub fn project_completion(project_id: i64) -> String {
    format!("{}/project/{}/completion", TASKS, project_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_paths() {
        assert_eq!(task(4), "/api/tasks/4");
        assert_eq!(task_complete(4), "/api/tasks/4/complete");
        assert_eq!(project_tasks(9), "/api/tasks/project/9");
        assert_eq!(project_completion(9), "/api/tasks/project/9/completion");
    }

    #[test]
    fn test_account_paths() {
        assert_eq!(admin_developer(2), "/api/admin/developers/2");
        assert_eq!(admin_client(3), "/api/admin/clients/3");
        assert_eq!(project(1), "/api/projects/1");
    }
}
