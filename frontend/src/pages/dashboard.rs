use log::debug;
use shared::{dashboard, LoadStatus, SortField};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::entities::HttpEntityApi;
use crate::components::entry_table::EntryTable;
use crate::components::toast::{Toast, ToastContext};
use crate::config::Config;
use crate::session::BrowserSessionStore;
use crate::state::{DashboardAction, DashboardStore};
use crate::Route;

fn entity_api() -> HttpEntityApi {
    HttpEntityApi::new(BrowserSessionStore.profile())
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let store = use_reducer(|| DashboardStore::new(Config::table()));
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().unwrap();

    // Kick off the first load on mount
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            store.dispatch(DashboardAction::Fetch);
            || ()
        });
    }

    // Every new generation issues one request; stale replies are dropped by the loader
    {
        let store = store.clone();
        let generation = store.loader.generation();
        use_effect_with(generation, move |generation| {
            let generation = *generation;
            if generation > 0 {
                spawn_local(async move {
                    let result = dashboard::fetch_entries(&entity_api(), &BrowserSessionStore).await;
                    store.dispatch(DashboardAction::Finished(generation, result));
                });
            }
            || ()
        });
    }

    let on_sort = {
        let store = store.clone();
        Callback::from(move |field: SortField| store.dispatch(DashboardAction::Sort(field)))
    };

    let on_page = {
        let store = store.clone();
        Callback::from(move |page: usize| store.dispatch(DashboardAction::Page(page)))
    };

    let on_delete = Config::entry_delete_enabled().then(|| {
        let store = store.clone();
        let notify = toast_context.notify.clone();
        Callback::from(move |token_id: String| {
            let store = store.clone();
            let notify = notify.clone();
            spawn_local(async move {
                debug!("Deleting entry {}", token_id);
                match dashboard::delete_entry(&entity_api(), &BrowserSessionStore, &token_id).await {
                    Ok(()) => {
                        notify.emit(Toast::success("Token deleted"));
                        store.dispatch(DashboardAction::Fetch);
                    }
                    Err(e) => notify.emit(Toast::error(e.user_message())),
                }
            });
        })
    });

    let on_retry = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(DashboardAction::Fetch))
    };

    let on_add = Callback::from(move |_: MouseEvent| navigator.push(&Route::AddToken));

    let table = store.loader.table();
    let status_banner = match store.loader.status() {
        LoadStatus::Loading => html! {
            <div class="text-center py-8 text-gray-500">{"Loading tokens..."}</div>
        },
        LoadStatus::Empty => html! {
            <div class="text-center py-8 text-gray-500">{"No tokens added yet."}</div>
        },
        LoadStatus::Failed(message) => html! {
            <div class="mb-4 p-4 rounded-md bg-red-50 border border-red-200 flex items-center justify-between">
                <p class="text-sm text-red-700">{message}</p>
                <button type="button" onclick={on_retry} class="text-sm font-medium text-red-700 underline">
                    {"Retry"}
                </button>
            </div>
        },
        LoadStatus::Unauthenticated(message) => html! {
            <div class="mb-4 p-4 rounded-md bg-yellow-50 border border-yellow-200 text-sm text-yellow-800">
                {format!("Please sign in again ({})", message)}
            </div>
        },
        LoadStatus::Ready => html! {},
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900">{"My Tokens"}</h1>
                <button
                    type="button"
                    onclick={on_add}
                    class="px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium hover:bg-blue-700"
                >
                    {"Add Token"}
                </button>
            </div>
            {status_banner}
            if !table.is_empty() {
                <EntryTable table={table.clone()} {on_sort} {on_page} {on_delete} />
            }
        </div>
    }
}
