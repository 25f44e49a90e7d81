use log::{debug, error};

use crate::api::EntityApi;
use crate::models::token_entry::TokenEntry;
use crate::session::{AgentSession, SessionStore};
use crate::table::{EntryTable, TableConfig};
use crate::{Result, SharedError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Empty,
    Failed(String),
    Unauthenticated(String),
}

/// Tracks the dashboard's list fetches. Every load gets a generation number
/// and only the newest one may change the list.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLoader {
    generation: u64,
    status: LoadStatus,
    table: EntryTable,
}

impl DashboardLoader {
    pub fn new(config: TableConfig) -> Self {
        Self {
            generation: 0,
            status: LoadStatus::Loading,
            table: EntryTable::new(Vec::new(), config),
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn table(&self) -> &EntryTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut EntryTable {
        &mut self.table
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks a new fetch as started and returns its generation.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.generation
    }

    /// Applies a fetch result. Returns `false` if a newer fetch superseded it.
    pub fn finish(&mut self, generation: u64, result: Result<Vec<TokenEntry>>) -> bool {
        if generation != self.generation {
            debug!(
                "Dropping stale entry list (generation {} < {})",
                generation, self.generation
            );
            return false;
        }
        match result {
            Ok(entries) => {
                debug!("Loaded {} token entries", entries.len());
                self.status = if entries.is_empty() {
                    LoadStatus::Empty
                } else {
                    LoadStatus::Ready
                };
                self.table.replace_entries(entries);
            }
            Err(e) if e.is_unauthenticated() => {
                self.status = LoadStatus::Unauthenticated(e.user_message());
                self.table.replace_entries(Vec::new());
            }
            Err(e) => {
                error!("Loading token entries failed: {}", e);
                self.status = LoadStatus::Failed(e.user_message());
            }
        }
        true
    }
}

/// Reads the session and fetches the agent's entries.
pub async fn fetch_entries(api: &dyn EntityApi, store: &dyn SessionStore) -> Result<Vec<TokenEntry>> {
    let session = AgentSession::load(store)?;
    api.list_entries(&session).await
}

/// Deletes one entry; the caller refetches on success.
pub async fn delete_entry(api: &dyn EntityApi, store: &dyn SessionStore, token_id: &str) -> Result<()> {
    if token_id.is_empty() {
        return Err(SharedError::MissingField("tokenId".to_string()));
    }
    let session = AgentSession::load(store)?;
    api.delete_entry(&session, token_id).await
}
