use async_trait::async_trait;

use crate::dto::entity::AddEntityRequest;
use crate::models::{draw_time::DrawTime, token_entry::TokenEntry};
use crate::session::AgentSession;
use crate::Result;

pub const LIST_ENTITIES_PATH: &str = "/api/agent/entity";
pub const DRAW_TIME_LIST_PATH: &str = "/api/admin/enitity-draw-time-rang-list";
pub const ADD_ENTITY_PATH: &str = "/api/agent/add-entity";
pub const DELETE_ENTITY_PATH: &str = "/api/agent/delete-entity-agent";

/// Contract of the remote entity backend.
///
/// Not `Send`: the browser implementation holds JS futures.
#[async_trait(?Send)]
pub trait EntityApi {
    /// All token entries recorded by the agent.
    async fn list_entries(&self, session: &AgentSession) -> Result<Vec<TokenEntry>>;

    /// Draw-time slots that new entries can be placed against.
    async fn list_draw_times(&self) -> Result<Vec<DrawTime>>;

    /// Creates every row of `request` in one call.
    async fn add_entries(&self, session: &AgentSession, request: &AddEntityRequest) -> Result<()>;

    async fn delete_entry(&self, session: &AgentSession, token_id: &str) -> Result<()>;
}
