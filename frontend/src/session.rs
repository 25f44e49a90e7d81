use gloo_storage::{LocalStorage, Storage};
use log::debug;
use shared::session::{AgentSession, SessionStore};

/// Key of the agent profile forwarded with list requests.
pub const AGENT_PROFILE_KEY: &str = "agentProfile";

/// Session values persisted in the browser's localStorage by the login flow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        // Values may be stored raw or JSON-encoded.
        LocalStorage::get::<String>(key).ok().or_else(|| raw_item(key))
    }
}

impl BrowserSessionStore {
    pub fn profile(&self) -> Option<serde_json::Value> {
        LocalStorage::get::<serde_json::Value>(AGENT_PROFILE_KEY).ok()
    }
}

fn raw_item(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

/// The one place the app asks "who is signed in".
pub fn current_session() -> shared::Result<AgentSession> {
    let session = AgentSession::load(&BrowserSessionStore);
    if let Err(e) = &session {
        debug!("No usable session: {}", e);
    }
    session
}
