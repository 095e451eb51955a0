//! CLI entry point for post-catalog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "post-catalog")]
#[command(version)]
#[command(about = "Lists and renders markdown blog posts as JSON", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print post metadata, newest first
    #[command(alias = "ls")]
    List,

    /// Print route parameters for every post
    Ids,

    /// Print one post with its rendered HTML
    Show {
        /// Post id (file name without extension)
        id: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "post_catalog=debug,info"
    } else {
        "post_catalog=info"
    };

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::List => {
            let blog = post_catalog::Blog::new(&base_dir)?;
            post_catalog::commands::list::run(&blog, "post", &mut stdout)?;
        }

        Commands::Ids => {
            let blog = post_catalog::Blog::new(&base_dir)?;
            post_catalog::commands::list::run(&blog, "id", &mut stdout)?;
        }

        Commands::Show { id } => {
            let blog = post_catalog::Blog::new(&base_dir)?;
            tracing::debug!("Rendering post {} from {:?}", id, blog.posts_dir);
            post_catalog::commands::show::run(&blog, &id, &mut stdout).await?;
        }

        Commands::Version => {
            println!("post-catalog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
