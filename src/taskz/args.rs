use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskz")]
#[command(about = "Persistent personal task list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the task document (defaults to the user data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tasks
    #[command(alias = "ls")]
    List,

    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Title of the task (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Toggle a task's completed state
    #[command(alias = "d")]
    Done {
        /// Task to toggle: a position from `list` (e.g. 2) or a full id
        task: String,
    },

    /// Change a task's title
    #[command(alias = "e")]
    Edit {
        /// Task to edit: a position from `list` (e.g. 2) or a full id
        task: String,

        /// New title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task to delete: a position from `list` (e.g. 2) or a full id
        task: String,
    },

    /// Show a single task with its id
    #[command(alias = "v")]
    Show {
        /// Task to show: a position from `list` (e.g. 2) or a full id
        task: String,
    },
}
