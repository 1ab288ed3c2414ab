//! Roster Binary
//!
//! Runs an interactive student records session on the terminal.

use std::io;

use clap::Parser;
use roster::{Config, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Interactive student record management")]
#[command(version)]
struct Args {
    /// Show only name, email and course when viewing all students
    #[arg(short, long)]
    brief: bool,

    /// Number of records to reserve room for up front
    #[arg(short, long, default_value = "64")]
    capacity: usize,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Roster v{}", roster::VERSION);

    let config = Config::builder()
        .brief_listing(args.brief)
        .initial_capacity(args.capacity)
        .build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }

    tracing::info!(records = session.store().len(), "Roster stopped");
}
