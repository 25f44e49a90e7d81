//! The agent's identity and bearer credential, read from client-local storage
//! through one accessor.

use std::collections::HashMap;

use crate::{Result, SharedError};

pub const AGENT_ID_KEY: &str = "agentID";
pub const TOKEN_KEY: &str = "token";

/// Read access to persisted client state (browser localStorage in the app).
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSession {
    pub agent_id: String,
    pub token: String,
}

impl AgentSession {
    /// Fails with `Unauthenticated` when either value is missing or blank.
    pub fn load(store: &dyn SessionStore) -> Result<Self> {
        let agent_id = non_blank(store.read(AGENT_ID_KEY))
            .ok_or_else(|| SharedError::Unauthenticated("no agent id stored".to_string()))?;
        let token = non_blank(store.read(TOKEN_KEY))
            .ok_or_else(|| SharedError::Unauthenticated("no access token stored".to_string()))?;
        Ok(Self { agent_id, token })
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// In-memory store, used by tests and non-browser callers.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn with_session(agent_id: &str, token: &str) -> Self {
        let mut store = Self::default();
        store.set(AGENT_ID_KEY, agent_id);
        store.set(TOKEN_KEY, token);
        store
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_complete_session() {
        let store = MemorySessionStore::with_session("agent-1", "tok");
        let session = AgentSession::load(&store).unwrap();
        assert_eq!(session.agent_id, "agent-1");
        assert_eq!(session.bearer(), "Bearer tok");
    }

    #[test]
    fn test_missing_token_is_unauthenticated() {
        let mut store = MemorySessionStore::default();
        store.set(AGENT_ID_KEY, "agent-1");
        let err = AgentSession::load(&store).unwrap_err();
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn test_blank_agent_id_is_unauthenticated() {
        let store = MemorySessionStore::with_session("  ", "tok");
        assert!(matches!(
            AgentSession::load(&store),
            Err(SharedError::Unauthenticated(_))
        ));
    }
}
