use std::collections::HashMap;
use std::time::Duration;

use axum::http::{HeaderMap, header::COOKIE};
use dedgar_store::UserRecord;
use tokio::sync::RwLock;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    expires_at: Instant,
}

/// Logged-in sessions keyed by the id stored in the session cookie
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn create(&self, user: &UserRecord) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session {
            user_id: user.id,
            name: user.name.clone(),
            expires_at: Instant::now() + self.ttl,
        };

        self.sessions.write().await.insert(id, session);
        tracing::debug!("Opened session for {}", user.name);
        id
    }

    /// Live session for `id`. Expired sessions are dropped on sight.
    pub async fn get(&self, id: &Uuid) -> Option<Session> {
        let session = self.sessions.read().await.get(id).cloned()?;

        if Instant::now() >= session.expires_at {
            self.sessions.write().await.remove(id);
            tracing::debug!("Session for {} expired", session.name);
            return None;
        }

        Some(session)
    }

    pub async fn remove(&self, id: &Uuid) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now < s.expires_at);
        before - sessions.len()
    }

    /// Sweep expired sessions every `period` until `cancel` fires
    pub async fn purge_periodically(&self, period: Duration, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(period.max(Duration::from_secs(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let purged = self.purge_expired().await;
                    if purged > 0 {
                        tracing::debug!("Purged {purged} expired sessions");
                    }
                }
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Session id carried by the request's `cookie_name` cookie
pub fn session_id(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}

pub fn session_cookie(cookie_name: &str, id: &Uuid, ttl: Duration) -> String {
    format!(
        "{cookie_name}={id}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl.as_secs()
    )
}

pub fn expired_cookie(cookie_name: &str) -> String {
    format!("{cookie_name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::HeaderValue;

    use super::*;

    fn user() -> UserRecord {
        UserRecord {
            id: 7,
            name: "shinobu".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn session_expires_after_ttl() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.create(&user()).await;

        assert_eq!(store.get(&id).await.map(|s| s.user_id), Some(7));

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(store.get(&id).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn purge_drops_only_expired() {
        let store = SessionStore::new(Duration::from_secs(60));
        store.create(&user()).await;
        tokio::time::advance(Duration::from_secs(30)).await;
        let fresh = store.create(&user()).await;
        tokio::time::advance(Duration::from_secs(31)).await;

        assert_eq!(store.purge_expired().await, 1);
        assert!(store.get(&fresh).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_sessions_are_swept_in_background() {
        let store = Arc::new(SessionStore::new(Duration::from_secs(60)));
        for _ in 0..1000 {
            store.create(&user()).await;
        }

        let cancel = CancellationToken::new();
        let sweeper = tokio::spawn({
            let store = Arc::clone(&store);
            let cancel = cancel.clone();
            async move { store.purge_periodically(Duration::from_secs(60), cancel).await }
        });

        tokio::time::sleep(Duration::from_secs(3600)).await;
        store.create(&user()).await;
        assert_eq!(store.len().await, 1);

        cancel.cancel();
        sweeper.await.unwrap();
    }

    #[tokio::test]
    async fn removed_session_is_gone() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.create(&user()).await;

        assert!(store.remove(&id).await);
        assert!(!store.remove(&id).await);
        assert!(store.get(&id).await.is_none());
    }

    #[test]
    fn finds_session_cookie_among_others() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; dedgar_session={id}; lang=ja")).unwrap(),
        );

        assert_eq!(session_id(&headers, "dedgar_session"), Some(id));
        assert_eq!(session_id(&headers, "other"), None);
    }

    #[test]
    fn garbage_cookie_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("dedgar_session=not-a-uuid"));

        assert_eq!(session_id(&headers, "dedgar_session"), None);
    }

    #[test]
    fn cookie_attributes() {
        let id = Uuid::nil();
        let cookie = session_cookie("s", &id, Duration::from_secs(10));

        assert!(cookie.starts_with("s=00000000-0000-0000-0000-000000000000;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.ends_with("Max-Age=10"));
        assert!(expired_cookie("s").ends_with("Max-Age=0"));
    }
}
