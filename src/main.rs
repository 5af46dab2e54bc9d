use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod db;
mod domain;
mod format;
mod view;

use crate::{app::AppContext, cli::args::Cli, view::ConsoleView};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut app = AppContext::load(config::book_path(cli.book))?;
    let mut view = ConsoleView::stdout();
    cli::session::run(&mut app, &mut view, io::stdin().lock())
}

// Logs go to stderr so they never mix with the interactive output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
