//! Browser-only checks of the localStorage-backed session accessor.
//! Run with `wasm-pack test --headless --chrome frontend`.

#![cfg(target_arch = "wasm32")]

use frontend::session::{current_session, BrowserSessionStore, AGENT_PROFILE_KEY};
use gloo_storage::{LocalStorage, Storage};
use shared::session::{AGENT_ID_KEY, TOKEN_KEY};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn reads_raw_and_json_encoded_values() {
    LocalStorage::clear();
    LocalStorage::raw().set_item(AGENT_ID_KEY, "agent-9").unwrap();
    LocalStorage::set(TOKEN_KEY, "tok").unwrap();

    let session = current_session().unwrap();
    assert_eq!(session.agent_id, "agent-9");
    assert_eq!(session.bearer(), "Bearer tok");
    LocalStorage::clear();
}

#[wasm_bindgen_test]
fn missing_token_is_unauthenticated() {
    LocalStorage::clear();
    LocalStorage::raw().set_item(AGENT_ID_KEY, "agent-9").unwrap();

    assert!(current_session().unwrap_err().is_unauthenticated());
    LocalStorage::clear();
}

#[wasm_bindgen_test]
fn profile_is_forwarded_as_json() {
    LocalStorage::clear();
    LocalStorage::set(AGENT_PROFILE_KEY, serde_json::json!({ "name": "Asha" })).unwrap();

    let profile = BrowserSessionStore.profile().unwrap();
    assert_eq!(profile["name"], "Asha");
    LocalStorage::clear();
}
