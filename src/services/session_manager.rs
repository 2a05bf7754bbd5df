// src/services/session_manager.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::message::{HistoryEntry, HistoryRole};

#[derive(Clone, Debug)]
pub struct Session {
    pub messages: Vec<HistoryEntry>,
    pub last_active: Instant,
}

impl Session {
    pub fn new() -> Self {
        Self { messages: Vec::new(), last_active: Instant::now() }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory conversation turns keyed by session id. Nothing outlives the process.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
    max_messages: usize,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .field("max_messages", &self.max_messages)
            .finish()
    }
}

impl SessionManager {
    pub fn new(ttl: Duration, max_messages: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            max_messages: max_messages.max(1),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // Create a fresh session and return its id.
    pub async fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), Session::new());
        id
    }

    // Ensure there's a session with this id.
    pub async fn ensure_session(&self, id: &str) -> String {
        {
            let guard = self.inner.read().await;
            if guard.contains_key(id) {
                return id.to_string();
            }
        }
        let mut guard = self.inner.write().await;
        guard.entry(id.to_string()).or_default();
        id.to_string()
    }

    /// Append a turn and touch `last_active`. Oldest turns beyond the cap are dropped.
    /// Returns the number of turns now held.
    pub async fn append_message(&self, session_id: &str, role: HistoryRole, content: impl Into<String>) -> usize {
        let mut guard = self.inner.write().await;
        let entry = guard.entry(session_id.to_string()).or_default();
        entry.messages.push(HistoryEntry { role, content: content.into() });
        if entry.messages.len() > self.max_messages {
            let excess = entry.messages.len() - self.max_messages;
            entry.messages.drain(..excess);
        }
        entry.last_active = Instant::now();
        entry.messages.len()
    }

    /// Prior turns in prompt-ready form
    pub async fn get_history(&self, session_id: &str) -> Option<Vec<HistoryEntry>> {
        let guard = self.inner.read().await;
        guard.get(session_id).map(|s| s.messages.clone())
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, s| now.duration_since(s.last_active) < self.ttl);
        before - guard.len()
    }
}
