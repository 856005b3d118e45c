//! CLI entry point for wp2jekyll

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "wp2jekyll")]
#[command(author = "Yukang Chen")]
#[command(version)]
#[command(about = "Migrate a WordPress export feed into Jekyll posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `convert`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert published posts into Jekyll Markdown files
    #[command(alias = "c")]
    Convert(PathArgs),

    /// List the posts that would be written, without writing them
    #[command(alias = "l")]
    List(PathArgs),
}

#[derive(Args, Default)]
struct PathArgs {
    /// WordPress export to read (defaults to feed.xml)
    #[arg(short, long)]
    feed: Option<String>,

    /// Directory to write posts into (defaults to _posts)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "wp2jekyll=debug,info"
    } else {
        "wp2jekyll=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let mut app = wp2jekyll::Migrator::new(&base_dir)?;

    match cli.command.unwrap_or(Commands::Convert(PathArgs::default())) {
        Commands::Convert(paths) => {
            apply(&mut app, paths);
            tracing::info!("Converting {:?} into {:?}", app.feed_path(), app.output_dir());
            app.convert()?;
        }

        Commands::List(paths) => {
            apply(&mut app, paths);
            app.list()?;
        }
    }

    Ok(())
}

/// Command-line paths take precedence over wp2jekyll.yml
fn apply(app: &mut wp2jekyll::Migrator, paths: PathArgs) {
    if let Some(feed) = paths.feed {
        app.config.feed = feed;
    }
    if let Some(output) = paths.output {
        app.config.output_dir = output;
    }
}
