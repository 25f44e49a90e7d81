pub mod models {
    pub mod draw_time;
    pub mod lenient;
    pub mod token_entry;
}

pub mod dto {
    pub mod common;
    pub mod entity;
}

pub mod api;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod format;
pub mod selector;
pub mod session;
pub mod table;
pub mod validation;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    draw_time::{DrawTime, DrawTimeCatalog, DrawTimeId},
    token_entry::TokenEntry,
};

// Re-export DTOs
pub use dto::{
    common::ErrorResponse,
    entity::{
        AddEntityRequest, DeleteEntityRequest, DrawTimeListResponse, ListEntitiesRequest,
        ListEntitiesResponse, StatusResponse, TokenSetInput, TokenSetsPayload,
    },
};

pub use api::EntityApi;
pub use dashboard::{DashboardLoader, LoadStatus};
pub use form::{EntryForm, SubmitOutcome, SubmitState};
pub use selector::select_default_draw_time;
pub use session::{AgentSession, SessionStore};
pub use table::{DisplayRow, EntryTable, SortDirection, SortField, TableConfig};
pub use validation::{FieldErrorKind, FormErrors, TokenField, TokenSetDraft};
