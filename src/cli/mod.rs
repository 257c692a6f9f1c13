//! CLI module for TeamSync
//!
//! Command-line parsing for the `teamsync` binary. Uses clap for argument
//! parsing and owo-colors for colored terminal output.

pub mod commands;
pub mod output;
pub mod store;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TeamSync - contractual team task sync
///
/// Terminal client for the admin, developer and client dashboards.
#[derive(Parser, Debug)]
#[command(
    name = "teamsync",
    version,
    about = "TeamSync - role-based project and task tracking",
    after_help = "EXAMPLES:\n    \
                  teamsync login ann@example.com         # Sign in (prompts for the password)\n    \
                  teamsync admin --tab completed         # Completed projects\n    \
                  teamsync project show 12               # Project detail with tasks\n    \
                  teamsync project toggle 12 5           # Flip task 5 of project 12\n    \
                  teamsync --yes admin delete-project 3  # Delete without prompting"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "teamsync.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Backend origin (overrides config)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        email: String,

        /// Read from a prompt when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// ADMIN, DEVELOPER or CLIENT
        #[arg(long, default_value = "DEVELOPER")]
        role: String,

        /// Read from a prompt when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Admin dashboard
    Admin {
        /// projects, ongoing, completed, clients or developers
        #[arg(short, long, default_value = "projects")]
        tab: String,

        #[command(subcommand)]
        action: Option<AdminAction>,
    },

    /// Developer dashboard
    Developer {
        /// Open one assigned project and list its tasks
        #[arg(short, long)]
        project: Option<i64>,
    },

    /// Client dashboard
    User {
        /// all, ongoing or completed
        #[arg(short, long, default_value = "all")]
        tab: String,
    },

    /// Project detail and task operations
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    DeleteProject { id: i64 },
    DeleteDeveloper { id: i64 },
    DeleteClient { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Project, tasks and completion
    Show { id: i64 },

    /// Flip a task between done and not done
    Toggle { id: i64, task: i64 },

    AddTask {
        id: i64,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Assigned developer id
        #[arg(long)]
        developer: i64,
    },

    DeleteTask { id: i64, task: i64 },
}
