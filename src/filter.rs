//! Tab filters over already-loaded project lists

use crate::types::{Project, ProjectStatus};
use serde::Deserialize;

/// Project filter tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectTab {
    #[default]
    All,
    Ongoing,
    Completed,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 3] = [ProjectTab::All, ProjectTab::Ongoing, ProjectTab::Completed];

    pub fn status(&self) -> Option<ProjectStatus> {
        match self {
            ProjectTab::All => None,
            ProjectTab::Ongoing => Some(ProjectStatus::Ongoing),
            ProjectTab::Completed => Some(ProjectStatus::Completed),
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            ProjectTab::All => "All Projects",
            ProjectTab::Ongoing => "Current Projects",
            ProjectTab::Completed => "Completed Projects",
        }
    }

    /// Page heading on the client dashboard
    pub fn heading(&self) -> &'static str {
        match self {
            ProjectTab::All => "All Projects",
            ProjectTab::Ongoing => "Ongoing Projects",
            ProjectTab::Completed => "Completed Projects",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            ProjectTab::All => "View all assigned projects",
            ProjectTab::Ongoing => "Currently active projects",
            ProjectTab::Completed => "Finished projects",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ALL" | "PROJECTS" => Some(ProjectTab::All),
            "ONGOING" => Some(ProjectTab::Ongoing),
            "COMPLETED" => Some(ProjectTab::Completed),
            _ => None,
        }
    }
}

/// Projects visible under `tab`, in their original order
pub fn filter_projects(projects: &[Project], tab: ProjectTab) -> Vec<Project> {
    match tab.status() {
        None => projects.to_vec(),
        Some(status) => projects
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect(),
    }
}

/// (ongoing, completed) counts
pub fn status_counts(projects: &[Project]) -> (usize, usize) {
    projects.iter().fold((0, 0), |(ongoing, completed), p| match p.status {
        ProjectStatus::Ongoing => (ongoing + 1, completed),
        ProjectStatus::Completed => (ongoing, completed + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn project(id: i64, status: ProjectStatus) -> Project {
        Project {
            id,
            title: format!("p{}", id),
            status,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, ProjectStatus::Ongoing),
            project(2, ProjectStatus::Completed),
            project(3, ProjectStatus::Ongoing),
            project(4, ProjectStatus::Completed),
            project(5, ProjectStatus::Ongoing),
        ]
    }

    #[rstest]
    #[case(ProjectTab::Ongoing, vec![1, 3, 5])]
    #[case(ProjectTab::Completed, vec![2, 4])]
    #[case(ProjectTab::All, vec![1, 2, 3, 4, 5])]
    fn test_filter_preserves_order(#[case] tab: ProjectTab, #[case] expected: Vec<i64>) {
        let ids: Vec<i64> = filter_projects(&sample(), tab).iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_all_tab_returns_list_unmodified() {
        let projects = sample();
        assert_eq!(filter_projects(&projects, ProjectTab::All), projects);
    }

    #[test]
    fn test_status_counts() {
        assert_eq!(status_counts(&sample()), (3, 2));
        assert_eq!(status_counts(&[]), (0, 0));
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!(ProjectTab::parse("ongoing"), Some(ProjectTab::Ongoing));
        assert_eq!(ProjectTab::parse("PROJECTS"), Some(ProjectTab::All));
        assert_eq!(ProjectTab::parse("archived"), None);
    }
}
