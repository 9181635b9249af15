use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use dedgar_config::Config;
use dedgar_mail::{ContactTemplate, HttpMailer, Mailer};
use dedgar_posts::PostCatalog;
use dedgar_store::Database;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::session::SessionStore;

pub struct AppState {
    pub config: Config,
    pub db: Arc<Database>,
    /// Current post snapshot; replaced wholesale on reload
    pub posts: RwLock<Arc<PostCatalog>>,
    /// None when mail is disabled
    pub mailer: Option<Arc<dyn Mailer>>,
    pub contact: ContactTemplate,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config, db: Database, mailer: Option<Arc<dyn Mailer>>) -> Self {
        let posts = PostCatalog::load(Path::new(&config.posts.dir), &config.posts.extension);

        let contact = ContactTemplate::new(
            config.mail.sender.clone(),
            config.mail.recipient.clone(),
            config.mail.subject.clone(),
            config.mail.allowed_link_host.clone(),
        );
        let sessions = SessionStore::new(Duration::from_secs(config.auth.session_ttl_secs));

        Self {
            config,
            db: Arc::new(db),
            posts: RwLock::new(Arc::new(posts)),
            mailer,
            contact,
            sessions,
        }
    }

    /// Open the database and mail client described by `config`
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let db = Database::open(
            Path::new(&config.database.path),
            Duration::from_millis(config.database.busy_timeout_ms),
        )
        .with_context(|| format!("Failed to open database {}", config.database.path))?;

        let mailer: Option<Arc<dyn Mailer>> = if config.mail.enabled {
            if config.mail.api_key.is_empty() {
                tracing::warn!("MAIL_API_KEY not set, contact form submissions will fail to send");
            }
            Some(Arc::new(HttpMailer::new(
                config.mail.api_url.clone(),
                config.mail.api_key.clone(),
            )))
        } else {
            tracing::warn!("Mail disabled, contact form submissions are only logged");
            None
        };

        Ok(Self::new(config, db, mailer))
    }

    pub async fn posts(&self) -> Arc<PostCatalog> {
        Arc::clone(&*self.posts.read().await)
    }

    /// Rebuild the post snapshot from disk and swap it in
    pub async fn reload_posts(&self) -> Result<usize, AppError> {
        let dir = self.config.posts.dir.clone();
        let extension = self.config.posts.extension.clone();

        let catalog =
            tokio::task::spawn_blocking(move || PostCatalog::load(Path::new(&dir), &extension))
                .await?;
        let count = catalog.len();

        *self.posts.write().await = Arc::new(catalog);
        tracing::info!("Reloaded {count} posts");
        Ok(count)
    }

    /// Run a blocking database call off the async runtime
    pub async fn with_db<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&Database) -> T + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        Ok(tokio::task::spawn_blocking(move || f(&db)).await?)
    }
}
