pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use cosmic_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.root;
    let state = cli.state;
    match cli.command {
        Commands::Subjects => handlers::handle_subjects(root),
        Commands::Docs { subject } => handlers::handle_docs(root, subject),
        Commands::Search { query } => handlers::handle_search(root, state, query),
        Commands::Open {
            subject,
            file,
            total,
        } => handlers::handle_open(state, subject, file, total),
        Commands::Goto {
            subject,
            file,
            page,
            total,
        } => handlers::handle_goto(state, subject, file, page, total),
        Commands::Bookmark {
            subject,
            file,
            page,
            total,
        } => handlers::handle_bookmark(state, subject, file, page, total),
        Commands::Keys {
            subject,
            file,
            total,
            zen,
            keys,
        } => handlers::handle_keys(state, subject, file, total, zen, keys),
        Commands::Continue => handlers::handle_continue(state),
        Commands::Exams { select, now } => handlers::handle_exams(select, now),
        Commands::Lang { code } => handlers::handle_lang(state, code),
        Commands::State => handlers::handle_state(state),
    }
}
