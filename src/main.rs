//! Folio - configuration-driven portfolio site builder and dev server.
//!
//! `folio build` renders `index.html` from the site configuration;
//! `folio serve` builds the page and serves the site root over HTTP.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::config::Config;
use folio::constants::{APP_BINARY_NAME, APP_NAME};
use folio::render;
use folio::server;
use folio::theme::{FilePreferences, ThemeController};

/// Folio - configuration-driven portfolio site builder and dev server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site root directory (holds portfolio.json5, images, themes/)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render index.html from the configuration
    Build,
    /// Build the page, then serve the site root over HTTP
    Serve {
        /// Port to listen on (a configured server.defaultPort wins)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

/// Renders the page and writes index.html into the site root.
fn build_site(root: &Path, config: &Config) -> Result<PathBuf> {
    let mut doc = render::render_page(config);

    // Apply the persisted (or default) theme so the built page ships with
    // its stylesheet link and palette in place.
    let prefs = FilePreferences::open_default()?;
    let mut themes = ThemeController::new(prefs, config);
    themes.apply_current(&mut doc, config)?;

    let output = root.join("index.html");
    fs::write(&output, doc.to_html())
        .context(format!("Failed to write {}", output.display()))?;

    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if !cli.root.exists() {
        eprintln!("Error: site root not found: {}", cli.root.display());
        eprintln!();
        eprintln!("Pass the directory holding your site with --root, for example:");
        eprintln!("  {APP_BINARY_NAME} --root my-site build");
        std::process::exit(1);
    }

    let config = Config::load(&cli.root)?;

    match cli.command {
        Command::Build => {
            let output = build_site(&cli.root, &config)?;
            println!("{} built {}", APP_NAME, output.display());
            Ok(())
        }
        Command::Serve { port, host } => {
            let output = build_site(&cli.root, &config)?;
            println!("{} built {}", APP_NAME, output.display());

            // Port resolution: configuration value, CLI argument, default.
            let port = config.resolve_port(port);
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .context("Invalid host/port combination")?;

            server::run_server(cli.root.clone(), config.cache_control(), addr).await
        }
    }
}
