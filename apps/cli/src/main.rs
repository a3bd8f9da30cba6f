mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "cache-hooks")]
#[command(about = "Cache-control build hooks for static sites", long_about = None)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write `_headers` and `.nojekyll` into the built site
    PostBuild {
        #[arg(long, short)]
        input: Option<PathBuf>,

        #[arg(long)]
        site_dir: Option<PathBuf>,
    },
    /// Print the template globals set up by the environment hook
    Env {
        #[arg(long, short)]
        input: Option<PathBuf>,

        #[arg(long)]
        templates: Option<PathBuf>,
    },
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cache_hooks=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cache_hooks=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::PostBuild { input, site_dir } => {
            commands::post_build(input.as_deref(), site_dir.as_deref())
        }
        Commands::Env { input, templates } => commands::env(input.as_deref(), templates.as_deref()),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
