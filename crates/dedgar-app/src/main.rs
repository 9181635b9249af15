use std::env;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dedgar_config::Config;
use dedgar_store::Database;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt};

pub mod error;
pub mod routes;
pub mod session;
pub mod signals;
pub mod state;


use self::state::AppState;

#[derive(Parser)]
#[command(name = "dedgar", about = "Personal site with kanji flashcards")]
struct Cli {
    /// JSON config file; environment variables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database path
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load kanji rows from a TSV file into the database
    Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };
    if let Some(database) = cli.database {
        config.database.path = database;
    }

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Initializing state...");
            let state = Arc::new(AppState::from_config(config)?);

            run(state, signals::shutdown_signal()).await
        }
        Command::Import { file } => import(&config, &file),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if env::var_os("DEDGAR_LOG_JSON").is_some() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

fn import(config: &Config, file: &Path) -> anyhow::Result<()> {
    let db = Database::open(
        Path::new(&config.database.path),
        Duration::from_millis(config.database.busy_timeout_ms),
    )?;
    let imported = db
        .import_tsv(file)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    let total = db.kanji_count()?;

    println!(
        "Imported {imported} kanji into {} ({total} total)",
        config.database.path
    );
    Ok(())
}

/// Serve until `shutdown` resolves, reloading posts on SIGHUP and sweeping
/// expired sessions meanwhile
pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()> + Send + 'static) -> anyhow::Result<()> {
    let address = state.config.server.bind_address();
    tracing::info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!("Server running on {address}");

    let cancel = CancellationToken::new();
    let reloader = tokio::spawn(signals::reload_posts_on_hangup(
        Arc::clone(&state),
        cancel.child_token(),
    ));

    let sweeper = tokio::spawn({
        let state = Arc::clone(&state);
        let period = Duration::from_secs(state.config.auth.purge_interval_secs);
        let cancel = cancel.child_token();
        async move { state.sessions.purge_periodically(period, cancel).await }
    });

    let app = routes::router(state);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    cancel.cancel();
    if let Err(e) = reloader.await {
        tracing::error!("post reload task panicked: {e}");
    }
    if let Err(e) = sweeper.await {
        tracing::error!("session sweep task panicked: {e}");
    }

    served?;
    tracing::info!("Server shut down");
    Ok(())
}
