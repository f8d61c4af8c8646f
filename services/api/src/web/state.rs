//! services/api/src/web/state.rs
//!
//! Defines the application's shared state and the registry of signed-in sessions.

use crate::config::Config;
use chrono::{DateTime, Duration, Utc};
use edubloom_core::auth::{AuthSession, AuthUser, AuthView, MemoryKeyValueStore};
use edubloom_core::ports::TextToSpeechService;
use edubloom_core::store::EntityStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<EntityStore>>,
    pub sessions: Arc<SessionRegistry>,
    pub config: Arc<Config>,
    pub tts_adapter: Arc<dyn TextToSpeechService>,
}

impl AppState {
    /// Builds the state around a freshly seeded store.
    pub fn new(config: Arc<Config>, tts_adapter: Arc<dyn TextToSpeechService>) -> Self {
        Self {
            store: Arc::new(RwLock::new(EntityStore::seeded())),
            sessions: Arc::new(SessionRegistry::default()),
            config,
            tts_adapter,
        }
    }
}

//=========================================================================================
// SessionRegistry (One Mock Auth Session Per Cookie)
//=========================================================================================

type Session = AuthSession<MemoryKeyValueStore>;

/// How long a session stays valid. Matches the cookie's `Max-Age`.
pub const SESSION_TTL_DAYS: i64 = 30;

pub fn session_ttl() -> Duration {
    Duration::days(SESSION_TTL_DAYS)
}

struct Entry {
    issued_at: DateTime<Utc>,
    session: Session,
}

/// Signed-in sessions keyed by the id carried in the `session` cookie.
///
/// Expired entries are dropped whenever the registry is touched.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Entry>>,
}

fn evict_expired(sessions: &mut HashMap<Uuid, Entry>, now: DateTime<Utc>) {
    let cutoff = now - session_ttl();
    sessions.retain(|_, entry| entry.issued_at > cutoff);
}

impl SessionRegistry {
    /// Stores an authenticated session and returns its new cookie id.
    pub async fn insert(&self, session: Session) -> Uuid {
        self.insert_issued_at(session, Utc::now()).await
    }

    /// Stores a session as if it had been issued at `issued_at`.
    pub async fn insert_issued_at(&self, session: Session, issued_at: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock().await;
        evict_expired(&mut sessions, Utc::now());
        sessions.insert(id, Entry { issued_at, session });
        id
    }

    /// The signed-in user behind `id`, if any.
    pub async fn user(&self, id: Uuid) -> Option<AuthUser> {
        let mut sessions = self.sessions.lock().await;
        evict_expired(&mut sessions, Utc::now());
        sessions.get(&id).and_then(|e| e.session.user().cloned())
    }

    pub async fn view(&self, id: Uuid) -> Option<AuthView> {
        let mut sessions = self.sessions.lock().await;
        evict_expired(&mut sessions, Utc::now());
        sessions.get(&id).map(|e| e.session.view())
    }

    /// Signs the session out and forgets it. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.lock().await;
        evict_expired(&mut sessions, Utc::now());
        match sessions.remove(&id) {
            Some(mut entry) => {
                entry.session.logout();
                true
            }
            None => false,
        }
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        evict_expired(&mut sessions, Utc::now());
        sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(email: &str) -> Session {
        let mut session = AuthSession::restore(MemoryKeyValueStore::default());
        assert!(session.login(email, "pw", None));
        session
    }

    #[tokio::test]
    async fn fresh_session_resolves_to_its_user() {
        let registry = SessionRegistry::default();
        let id = registry.insert(signed_in("ada@example.com")).await;

        let user = registry.user(id).await.expect("live session");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn session_past_its_ttl_is_gone() {
        let registry = SessionRegistry::default();
        let stale = Utc::now() - session_ttl() - Duration::minutes(1);
        let id = registry.insert_issued_at(signed_in("old@example.com"), stale).await;

        assert!(registry.user(id).await.is_none());
        assert!(registry.view(id).await.is_none());
        assert!(!registry.remove(id).await);
    }

    #[tokio::test]
    async fn insert_sweeps_expired_entries() {
        let registry = SessionRegistry::default();
        let stale = Utc::now() - session_ttl() - Duration::hours(1);
        let old = registry.insert_issued_at(signed_in("old@example.com"), stale).await;
        let fresh = registry.insert(signed_in("new@example.com")).await;

        let sessions = registry.sessions.lock().await;
        assert!(!sessions.contains_key(&old));
        assert!(sessions.contains_key(&fresh));
    }

    #[test]
    fn eviction_keeps_entries_inside_the_ttl() {
        let now = Utc::now();
        let mut sessions = HashMap::new();
        let inside = Uuid::new_v4();
        let outside = Uuid::new_v4();
        let entry = |days: i64, email: &str| Entry {
            issued_at: now - Duration::days(days),
            session: signed_in(email),
        };
        sessions.insert(inside, entry(SESSION_TTL_DAYS - 1, "a@example.com"));
        sessions.insert(outside, entry(SESSION_TTL_DAYS + 1, "b@example.com"));

        evict_expired(&mut sessions, now);

        assert!(sessions.contains_key(&inside));
        assert!(!sessions.contains_key(&outside));
    }
}
