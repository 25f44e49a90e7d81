//! State of the multi-row add-token form: rows, touched fields, the fetched
//! draw times and the submission lifecycle.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use log::{debug, error, info};

use crate::api::EntityApi;
use crate::dto::entity::AddEntityRequest;
use crate::models::draw_time::{DrawTime, DrawTimeCatalog, DrawTimeId};
use crate::selector::select_default_draw_time;
use crate::session::AgentSession;
use crate::validation::{FormErrors, TokenField, TokenSetDraft};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    /// Backend or transport failure; rows are kept as entered.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation errors or a request already in flight.
    NotSubmitted,
    Created,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    rows: Vec<TokenSetDraft>,
    /// Stable identity per row, parallel to `rows`; survives removals.
    row_ids: Vec<u64>,
    next_row_id: u64,
    touched: BTreeSet<(usize, TokenField)>,
    catalog: DrawTimeCatalog,
    default_draw_time: Option<DrawTimeId>,
    state: SubmitState,
}

impl EntryForm {
    /// A single blank row dated `today`; draw times are not known yet.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            rows: vec![TokenSetDraft::new(None, Some(today))],
            row_ids: vec![0],
            next_row_id: 1,
            touched: BTreeSet::new(),
            catalog: DrawTimeCatalog::default(),
            default_draw_time: None,
            state: SubmitState::Idle,
        }
    }

    pub fn rows(&self) -> &[TokenSetDraft] {
        &self.rows
    }

    pub fn row_ids(&self) -> &[u64] {
        &self.row_ids
    }

    pub fn catalog(&self) -> &DrawTimeCatalog {
        &self.catalog
    }

    pub fn default_draw_time(&self) -> Option<&DrawTimeId> {
        self.default_draw_time.as_ref()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Installs the fetched draw times and computes the default for rows
    /// appended from now on. Existing rows are left alone.
    pub fn load_draw_times(&mut self, draw_times: Vec<DrawTime>, now: NaiveTime) {
        self.default_draw_time = select_default_draw_time(now, &draw_times).map(|d| d.id.clone());
        debug!(
            "Loaded {} draw times, default {:?}",
            draw_times.len(),
            self.default_draw_time
        );
        self.catalog = DrawTimeCatalog::new(draw_times);
    }

    pub fn append_row(&mut self, today: NaiveDate) {
        self.rows
            .push(TokenSetDraft::new(self.default_draw_time.clone(), Some(today)));
        self.row_ids.push(self.next_row_id);
        self.next_row_id += 1;
    }

    /// The first row is permanent and the form never drops below one row.
    pub fn can_remove(&self, index: usize) -> bool {
        index > 0 && index < self.rows.len() && self.rows.len() > 1
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        if !self.can_remove(index) {
            return false;
        }
        self.rows.remove(index);
        self.row_ids.remove(index);
        self.touched = self
            .touched
            .iter()
            .filter(|(row, _)| *row != index)
            .map(|&(row, field)| if row > index { (row - 1, field) } else { (row, field) })
            .collect();
        true
    }

    pub fn set_token_number(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.token_number = value;
        }
    }

    pub fn set_count(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.count = value;
        }
    }

    pub fn set_draw_time(&mut self, index: usize, value: Option<DrawTimeId>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.draw_time = value;
        }
    }

    pub fn set_date(&mut self, index: usize, value: Option<NaiveDate>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.date = value;
        }
    }

    pub fn blur(&mut self, index: usize, field: TokenField) {
        if index < self.rows.len() {
            self.touched.insert((index, field));
        }
    }

    pub fn is_touched(&self, index: usize, field: TokenField) -> bool {
        self.touched.contains(&(index, field))
    }

    pub fn errors(&self) -> FormErrors {
        FormErrors::collect(&self.rows, &self.catalog)
    }

    /// Error text for a field the user has already left.
    pub fn visible_error(&self, index: usize, field: TokenField) -> Option<&'static str> {
        if self.is_touched(index, field) {
            self.errors().message(index, field)
        } else {
            None
        }
    }

    fn touch_all(&mut self) {
        for index in 0..self.rows.len() {
            for field in TokenField::ALL {
                self.touched.insert((index, field));
            }
        }
    }

    /// Starts a submission and returns the request to send, or `None` when a
    /// request is already in flight or any row is invalid.
    pub fn begin_submit(&mut self, session: &AgentSession) -> Option<AddEntityRequest> {
        if self.is_submitting() {
            debug!("Ignoring submit while a request is in flight");
            return None;
        }
        self.touch_all();

        let errors = self.errors();
        if !errors.is_empty() {
            debug!("Submit blocked by {} field errors", errors.len());
            return None;
        }

        let token_sets = match self
            .rows
            .iter()
            .map(|row| row.to_input(&self.catalog))
            .collect::<Result<Vec<_>>>()
        {
            Ok(sets) => sets,
            Err(e) => {
                error!("Could not build token sets: {}", e);
                return None;
            }
        };

        self.state = SubmitState::Submitting;
        Some(AddEntityRequest::new(session.agent_id.clone(), token_sets))
    }

    pub fn finish_submit(&mut self, result: Result<()>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                info!("Created {} token entries", self.rows.len());
                self.state = SubmitState::Succeeded;
                SubmitOutcome::Created
            }
            Err(e) => {
                let message = e.user_message();
                error!("Adding token entries failed: {}", message);
                self.state = SubmitState::Failed(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

/// Drives one full submission against `api`.
pub async fn submit(form: &mut EntryForm, api: &dyn EntityApi, session: &AgentSession) -> SubmitOutcome {
    let Some(request) = form.begin_submit(session) else {
        return SubmitOutcome::NotSubmitted;
    };
    let result = api.add_entries(session, &request).await;
    form.finish_submit(result)
}
