//! Routed pages

pub mod admin;
pub mod developer;
pub mod home;
pub mod login;
pub mod project;
pub mod user;

pub use admin::AdminDashboardPage;
pub use developer::DeveloperDashboardPage;
pub use home::HomePage;
pub use login::{LoginPage, RegisterPage};
pub use project::ProjectDetailPage;
pub use user::UserDashboardPage;
