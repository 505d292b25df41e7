//! Profile sessions — the explicit context for one scraped profile.
//!
//! A session owns the profile's sections and every analysis computed for them,
//! keyed by section title. Handlers look a session up by id and pass it into the
//! analysis step; nothing is kept in ambient state. Sessions expire a fixed time
//! after they are opened; expired ones are evicted on access and on every insert.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::profile::sections::ProfileSection;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSession {
    pub id: Uuid,
    pub sections: Vec<ProfileSection>,
    pub analyses: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl ProfileSession {
    pub fn new(sections: Vec<ProfileSection>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sections,
            analyses: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    pub fn section(&self, title: &str) -> Option<&ProfileSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn titles(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.title.clone()).collect()
    }

    pub fn cached_analysis(&self, title: &str) -> Option<&str> {
        self.analyses.get(title).map(String::as_str)
    }

    /// Records an analysis. The first one stored for a title wins, so two
    /// concurrent requests for the same section agree on the answer.
    pub fn record_analysis(&mut self, title: &str, analysis: String) -> &str {
        self.analyses.entry(title.to_string()).or_insert(analysis)
    }
}

/// Lifetime of a session when none is configured.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

struct Entry {
    session: ProfileSession,
    opened: Instant,
}

/// All live profile sessions, shared across handlers.
#[derive(Clone)]
pub struct ProfileSessions {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl Default for ProfileSessions {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl ProfileSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::default(),
            ttl,
        }
    }

    fn is_live(&self, entry: &Entry) -> bool {
        entry.opened.elapsed() < self.ttl
    }

    /// Stores a new session and evicts every expired one.
    pub async fn insert(&self, session: ProfileSession) -> Uuid {
        let id = session.id;
        let mut map = self.inner.write().await;
        let before = map.len();
        map.retain(|_, entry| self.is_live(entry));
        let evicted = before - map.len();
        if evicted > 0 {
            debug!(evicted, "Evicted expired profile sessions");
        }
        map.insert(
            id,
            Entry {
                session,
                opened: Instant::now(),
            },
        );
        id
    }

    /// A snapshot of the session; the lock is released before returning.
    pub async fn get(&self, id: Uuid) -> Option<ProfileSession> {
        {
            let map = self.inner.read().await;
            match map.get(&id) {
                Some(entry) if self.is_live(entry) => return Some(entry.session.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        self.evict(id).await;
        None
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner
            .write()
            .await
            .remove(&id)
            .is_some_and(|entry| self.is_live(&entry))
    }

    /// Applies `f` to the session under the write lock. `None` if the session is gone.
    pub async fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut ProfileSession) -> T) -> Option<T> {
        let mut map = self.inner.write().await;
        if !self.is_live(map.get(&id)?) {
            map.remove(&id);
            return None;
        }
        map.get_mut(&id).map(|entry| f(&mut entry.session))
    }

    /// Number of stored sessions, including expired ones not yet evicted.
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }

    async fn evict(&self, id: Uuid) {
        let mut map = self.inner.write().await;
        if map.get(&id).is_some_and(|entry| !self.is_live(entry)) {
            map.remove(&id);
            debug!(session_id = %id, "Evicted expired profile session");
        }
    }
}
