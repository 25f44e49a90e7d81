//! Reducer stores backing the two pages. Domain state lives in `shared`;
//! these wrappers only adapt it to Yew's `Reducible`.

use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};
use log::debug;
use shared::{
    AddEntityRequest, AgentSession, DashboardLoader, DrawTime, DrawTimeId, EntryForm, Result,
    SortField, SubmitOutcome, TableConfig, TokenEntry, TokenField,
};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FormStore {
    pub form: EntryForm,
    /// Request waiting to be sent, tagged with its submission number.
    pub pending: Option<(u64, AgentSession, AddEntityRequest)>,
    pub submissions: u64,
    pub last_outcome: Option<SubmitOutcome>,
}

impl FormStore {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: EntryForm::new(today),
            pending: None,
            submissions: 0,
            last_outcome: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    DrawTimesLoaded(Vec<DrawTime>, NaiveTime),
    Append(NaiveDate),
    Remove(usize),
    TokenNumber(usize, String),
    Count(usize, String),
    DrawTime(usize, Option<DrawTimeId>),
    Date(usize, Option<NaiveDate>),
    Blur(usize, TokenField),
    Submit(AgentSession),
    Finished(Result<()>),
}

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::DrawTimesLoaded(draw_times, now) => next.form.load_draw_times(draw_times, now),
            FormAction::Append(today) => next.form.append_row(today),
            FormAction::Remove(index) => {
                next.form.remove_row(index);
            }
            FormAction::TokenNumber(index, value) => next.form.set_token_number(index, value),
            FormAction::Count(index, value) => next.form.set_count(index, value),
            FormAction::DrawTime(index, value) => next.form.set_draw_time(index, value),
            FormAction::Date(index, value) => next.form.set_date(index, value),
            FormAction::Blur(index, field) => next.form.blur(index, field),
            FormAction::Submit(session) => {
                if let Some(request) = next.form.begin_submit(&session) {
                    next.submissions += 1;
                    next.pending = Some((next.submissions, session, request));
                    next.last_outcome = None;
                }
            }
            FormAction::Finished(result) => {
                next.pending = None;
                next.last_outcome = Some(next.form.finish_submit(result));
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStore {
    pub loader: DashboardLoader,
}

impl DashboardStore {
    pub fn new(config: TableConfig) -> Self {
        Self {
            loader: DashboardLoader::new(config),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    Fetch,
    Finished(u64, Result<Vec<TokenEntry>>),
    Sort(SortField),
    Page(usize),
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::Fetch => {
                let generation = next.loader.start();
                debug!("Dashboard fetch #{} started", generation);
            }
            DashboardAction::Finished(generation, result) => {
                next.loader.finish(generation, result);
            }
            DashboardAction::Sort(field) => next.loader.table_mut().toggle_sort(field),
            DashboardAction::Page(page) => next.loader.table_mut().set_page(page),
        }
        Rc::new(next)
    }
}
