use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use shared::{
    AgentSession, DrawTime, LoadStatus, SharedError, SortDirection, SortField, SubmitOutcome,
    TableConfig, TokenEntry,
};
use yew::functional::Reducible;

use crate::api::api_url;
use crate::components::toast::{Toast, ToastAction, ToastQueue};
use crate::components::token_row::row_heading;
use crate::config::Config;
use crate::state::{DashboardAction, DashboardStore, FormAction, FormStore};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

fn session() -> AgentSession {
    AgentSession {
        agent_id: "agent-1".to_string(),
        token: "tok".to_string(),
    }
}

fn filled_form() -> Rc<FormStore> {
    let store = Rc::new(FormStore::new(today()));
    let store = store.reduce(FormAction::DrawTimesLoaded(
        vec![DrawTime::new("d-1", "10:00"), DrawTime::new("d-2", "15:00")],
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ));
    let store = store.reduce(FormAction::TokenNumber(0, "5".to_string()));
    let store = store.reduce(FormAction::Count(0, "20".to_string()));
    store.reduce(FormAction::DrawTime(0, Some("d-2".into())))
}

fn entry(id: &str) -> TokenEntry {
    TokenEntry {
        token_id: Some(id.to_string()),
        token_number: id.to_string(),
        token_count: 1,
        date: "2024-03-05".to_string(),
        draw_time: "10:00".to_string(),
    }
}

#[test]
fn test_api_url_is_relative_without_base() {
    if Config::api_base_url().is_empty() {
        assert_eq!(api_url("/api/agent/entity"), "/api/agent/entity");
    } else {
        assert!(api_url("/api/agent/entity").ends_with("/api/agent/entity"));
    }
}

#[test]
fn test_config_values_are_usable() {
    assert!(Config::page_size() > 0);
    assert_eq!(Config::table().page_size, Config::page_size());
    assert!(Config::request_timeout_ms() > 0);
}

#[test]
fn test_submit_prepares_one_pending_request() {
    let store = filled_form().reduce(FormAction::Submit(session()));

    let (number, pending_session, request) = store.pending.clone().unwrap();
    assert_eq!(number, 1);
    assert_eq!(pending_session, session());
    assert_eq!(request.token_sets().len(), 1);
    assert_eq!(request.token_sets()[0].draw_time, "15:00");
    assert!(store.form.is_submitting());
}

#[test]
fn test_submit_while_in_flight_keeps_the_first_request() {
    let store = filled_form().reduce(FormAction::Submit(session()));
    let store = store.reduce(FormAction::Submit(session()));
    assert_eq!(store.submissions, 1);
}

#[test]
fn test_invalid_form_never_becomes_pending() {
    let store = Rc::new(FormStore::new(today())).reduce(FormAction::Submit(session()));
    assert!(store.pending.is_none());
    assert_eq!(store.last_outcome, None);
}

#[test]
fn test_finished_failure_is_reported_and_rows_kept() {
    let store = filled_form().reduce(FormAction::Submit(session()));
    let store = store.reduce(FormAction::Finished(Err(SharedError::Server {
        status: 500,
        message: "Backend down".to_string(),
    })));

    assert!(store.pending.is_none());
    assert_eq!(
        store.last_outcome,
        Some(SubmitOutcome::Failed("Backend down".to_string()))
    );
    assert_eq!(store.form.rows()[0].token_number, "5");
}

#[test]
fn test_append_and_remove_rows() {
    let store = filled_form().reduce(FormAction::Append(today()));
    assert_eq!(store.form.rows().len(), 2);
    assert_eq!(store.form.rows()[1].draw_time, Some("d-1".into()));

    let store = store.reduce(FormAction::Remove(0));
    assert_eq!(store.form.rows().len(), 2);
    let store = store.reduce(FormAction::Remove(1));
    assert_eq!(store.form.rows().len(), 1);
}

#[test]
fn test_removed_row_does_not_lend_its_key() {
    let store = filled_form().reduce(FormAction::Append(today()));
    let store = store.reduce(FormAction::Append(today()));
    let store = store.reduce(FormAction::DrawTime(2, Some("d-2".into())));
    let store = store.reduce(FormAction::Remove(1));

    assert_eq!(store.form.row_ids(), &[0, 2]);
    assert_eq!(store.form.rows()[1].draw_time, Some("d-2".into()));
}

#[test]
fn test_row_headings_count_from_one() {
    assert_eq!(row_heading(0), "Token 1");
    assert_eq!(row_heading(4), "Token 5");
}

#[test]
fn test_dismissing_a_toast_keeps_later_ones() {
    let first = Toast::error("Draw closed");
    let second = Toast::error("Draw closed");
    let queue = Rc::new(ToastQueue::default())
        .reduce(ToastAction::Show(first.clone()))
        .reduce(ToastAction::Show(second.clone()));

    let queue = queue.reduce(ToastAction::Dismiss(first.id));

    assert_eq!(queue.toasts, vec![second]);
}

#[test]
fn test_dashboard_ignores_superseded_fetch() {
    let store = Rc::new(DashboardStore::new(TableConfig::default()));
    let store = store.reduce(DashboardAction::Fetch);
    let store = store.reduce(DashboardAction::Fetch);
    assert_eq!(store.loader.generation(), 2);

    let store = store.reduce(DashboardAction::Finished(1, Ok(vec![entry("old")])));
    assert_eq!(store.loader.status(), &LoadStatus::Loading);

    let store = store.reduce(DashboardAction::Finished(2, Ok(vec![entry("new")])));
    assert_eq!(store.loader.status(), &LoadStatus::Ready);
    assert_eq!(store.loader.table().rows()[0].key, "new");
}

#[test]
fn test_dashboard_sort_and_page_actions() {
    let entries = (0..15).map(|i| entry(&format!("{:02}", i))).collect();
    let store = Rc::new(DashboardStore::new(TableConfig { page_size: 10 }));
    let store = store.reduce(DashboardAction::Fetch);
    let store = store.reduce(DashboardAction::Finished(1, Ok(entries)));

    let store = store.reduce(DashboardAction::Page(2));
    assert_eq!(store.loader.table().page(), 2);
    assert_eq!(store.loader.table().rows()[0].serial, 11);

    let store = store.reduce(DashboardAction::Sort(SortField::TokenNumber));
    let store = store.reduce(DashboardAction::Sort(SortField::TokenNumber));
    let sort = store.loader.table().sort().unwrap();
    assert_eq!(sort.direction, SortDirection::Desc);
    assert_eq!(store.loader.table().page(), 1);
    assert_eq!(store.loader.table().rows()[0].token_number, "14");
}
