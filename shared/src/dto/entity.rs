use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{draw_time::DrawTime, token_entry::TokenEntry};
use crate::{Result, SharedError};

pub const STATUS_SUCCESS: &str = "success";

/// Body of `POST /api/agent/entity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListEntitiesRequest {
    /// Opaque agent profile forwarded as-is.
    #[serde(rename = "UserData", default, skip_serializing_if = "Option::is_none")]
    pub agent_context: Option<serde_json::Value>,

    #[serde(rename = "_id")]
    pub agent_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntitiesResponse {
    #[serde(rename = "listEntity", default)]
    pub list_entity: Option<Vec<TokenEntry>>,
}

impl ListEntitiesResponse {
    pub fn into_entries(self) -> Result<Vec<TokenEntry>> {
        self.list_entity
            .ok_or_else(|| SharedError::UnexpectedResponse("response has no listEntity".to_string()))
    }
}

/// Body of `GET /api/admin/enitity-draw-time-rang-list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawTimeListResponse {
    pub status: String,
    #[serde(rename = "drawTimeList", default)]
    pub draw_time_list: Vec<DrawTime>,
}

impl DrawTimeListResponse {
    pub fn into_draw_times(self) -> Result<Vec<DrawTime>> {
        if self.status == STATUS_SUCCESS {
            Ok(self.draw_time_list)
        } else {
            Err(SharedError::UnexpectedResponse(format!(
                "draw time list request returned status {:?}",
                self.status
            )))
        }
    }
}

/// One row of a create submission, with the draw time already resolved to
/// its time-of-day string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSetInput {
    #[serde(rename = "tokenNumber")]
    pub token_number: String,
    pub count: String,
    #[serde(rename = "drawTime")]
    pub draw_time: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSetsPayload {
    #[serde(rename = "tokenSets")]
    pub token_sets: Vec<TokenSetInput>,
}

/// Body of `POST /api/agent/add-entity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddEntityRequest {
    #[serde(rename = "_id")]
    pub agent_id: String,
    pub values: TokenSetsPayload,
}

impl AddEntityRequest {
    pub fn new(agent_id: impl Into<String>, token_sets: Vec<TokenSetInput>) -> Self {
        Self {
            agent_id: agent_id.into(),
            values: TokenSetsPayload { token_sets },
        }
    }

    pub fn token_sets(&self) -> &[TokenSetInput] {
        &self.values.token_sets
    }
}

/// Body of `POST /api/agent/delete-entity-agent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteEntityRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
