use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use shared::api::{ADD_ENTITY_PATH, DELETE_ENTITY_PATH, DRAW_TIME_LIST_PATH, LIST_ENTITIES_PATH};
use shared::{
    AddEntityRequest, AgentSession, DeleteEntityRequest, DrawTime, DrawTimeListResponse,
    EntityApi, ListEntitiesRequest, ListEntitiesResponse, Result, SharedError, StatusResponse,
    TokenEntry,
};

use crate::api::api_url;
use crate::api::utils::{
    authenticated_post, decode, error_from_response, send, send_builder,
};

/// `EntityApi` over the backend's HTTP endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpEntityApi {
    agent_context: Option<serde_json::Value>,
}

impl HttpEntityApi {
    pub fn new(agent_context: Option<serde_json::Value>) -> Self {
        Self { agent_context }
    }
}

fn serialize_error(e: gloo_net::Error) -> SharedError {
    SharedError::Conversion(e.to_string())
}

#[async_trait(?Send)]
impl EntityApi for HttpEntityApi {
    async fn list_entries(&self, session: &AgentSession) -> Result<Vec<TokenEntry>> {
        debug!("Fetching token entries for agent {}", session.agent_id);

        let body = ListEntitiesRequest {
            agent_context: self.agent_context.clone(),
            agent_id: session.agent_id.clone(),
        };
        let request = authenticated_post(&api_url(LIST_ENTITIES_PATH), session)
            .json(&body)
            .map_err(serialize_error)?;
        let response = send(request).await?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        let entries = decode::<ListEntitiesResponse>(response).await?.into_entries()?;
        debug!("Fetched {} token entries", entries.len());
        Ok(entries)
    }

    async fn list_draw_times(&self) -> Result<Vec<DrawTime>> {
        debug!("Fetching draw time list");

        let response = send_builder(Request::get(&api_url(DRAW_TIME_LIST_PATH))).await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        let draw_times = decode::<DrawTimeListResponse>(response).await?.into_draw_times()?;
        debug!("Fetched {} draw times", draw_times.len());
        Ok(draw_times)
    }

    async fn add_entries(&self, session: &AgentSession, request: &AddEntityRequest) -> Result<()> {
        gloo::console::log!("API: add_entries rows:", request.token_sets().len());

        let http_request = authenticated_post(&api_url(ADD_ENTITY_PATH), session)
            .json(request)
            .map_err(serialize_error)?;
        let response = send(http_request).await?;

        if !response.ok() {
            let error = error_from_response(response).await;
            gloo::console::error!("API: add_entries failed:", error.to_string());
            return Err(error);
        }

        debug!("Token entries created for agent {}", request.agent_id);
        Ok(())
    }

    async fn delete_entry(&self, session: &AgentSession, token_id: &str) -> Result<()> {
        debug!("Deleting token entry {}", token_id);

        let body = DeleteEntityRequest {
            id: token_id.to_string(),
        };
        let request = authenticated_post(&api_url(DELETE_ENTITY_PATH), session)
            .json(&body)
            .map_err(serialize_error)?;
        let response = send(request).await?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        let status = decode::<StatusResponse>(response).await?;
        if !status.is_success() {
            return Err(SharedError::UnexpectedResponse(
                status
                    .message
                    .unwrap_or_else(|| format!("delete returned status {}", status.status)),
            ));
        }
        Ok(())
    }
}
