//! Reusable UI components

pub mod fields;
pub mod header;
pub mod loading;
pub mod profile_modal;
pub mod project_card;
pub mod protected;
pub mod sidebar;
pub mod task_row;

pub use fields::{ModalFrame, TextArea, TextField};
pub use header::Header;
pub use loading::{LoadingOverlay, LoadingSpinner, PageLoading};
pub use project_card::{ProgressBar, ProjectCard, StatCard, StatusBadge};
pub use profile_modal::ProfileModal;
pub use protected::Protected;
pub use sidebar::Sidebar;
pub use task_row::TaskRow;
