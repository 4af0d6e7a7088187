use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "cosmicdev: study companion from a shell", long_about = None)]
pub struct Cli {
    /// Content root holding one folder per subject
    #[arg(long, global = true, default_value = "content")]
    pub root: PathBuf,

    /// Journal file holding reading progress, bookmarks and preferences
    #[arg(long, global = true, default_value = "cosmic.state")]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List subject folders with their PDF counts
    Subjects,

    /// List the PDFs inside one subject
    Docs { subject: String },

    /// Filter subjects by name, as the dashboard search box does
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Show the restored reading state of a document
    Open {
        subject: String,
        file: String,
        /// page count reported by the renderer
        #[arg(long)]
        total: Option<u32>,
    },

    /// Navigate to a page (clamped) and record it as last read
    Goto {
        subject: String,
        file: String,
        page: i64,
        #[arg(long)]
        total: Option<u32>,
    },

    /// Toggle the bookmark on the current page
    Bookmark {
        subject: String,
        file: String,
        /// navigate here first
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        total: Option<u32>,
    },

    /// Replay reader key presses (ArrowLeft, ArrowRight, +, =, -, 0, Escape)
    Keys {
        subject: String,
        file: String,
        #[arg(long)]
        total: Option<u32>,
        /// start in zen mode
        #[arg(long)]
        zen: bool,
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },

    /// Print the dashboard's continue-reading shortcut
    Continue,

    /// Exam countdown
    Exams {
        /// subject of the selected exam
        #[arg(long)]
        select: Option<String>,
        /// evaluate at this Unix time (seconds) instead of now
        #[arg(long)]
        now: Option<i64>,
    },

    /// Show or set the interface language (en, ar)
    Lang { code: Option<String> },

    /// Dump every stored key and value
    State,
}
