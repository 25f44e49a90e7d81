use chrono::{Local, NaiveDate, NaiveTime};
use shared::{EntityApi, SubmitOutcome, TokenField};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::entities::HttpEntityApi;
use crate::components::toast::{Toast, ToastContext};
use crate::components::token_row::TokenRow;
use crate::session::{current_session, BrowserSessionStore};
use crate::state::{FormAction, FormStore};
use crate::Route;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn now() -> NaiveTime {
    Local::now().time()
}

#[function_component(AddToken)]
pub fn add_token() -> Html {
    let store = use_reducer(|| FormStore::new(today()));
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().unwrap();

    // Draw times are fetched once per visit
    {
        let store = store.clone();
        let notify = toast_context.notify.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match HttpEntityApi::default().list_draw_times().await {
                    Ok(draw_times) => store.dispatch(FormAction::DrawTimesLoaded(draw_times, now())),
                    Err(e) => notify.emit(Toast::error(format!(
                        "Could not load draw times: {}",
                        e.user_message()
                    ))),
                }
            });
            || ()
        });
    }

    // Sends the request prepared by the reducer; at most one per submission
    {
        let store = store.clone();
        let submission = store.pending.as_ref().map(|(number, _, _)| *number);
        use_effect_with(submission, move |submission| {
            if submission.is_some() {
                if let Some((_, session, request)) = store.pending.clone() {
                    spawn_local(async move {
                        let api = HttpEntityApi::new(BrowserSessionStore.profile());
                        let result = api.add_entries(&session, &request).await;
                        store.dispatch(FormAction::Finished(result));
                    });
                }
            }
            || ()
        });
    }

    {
        let notify = toast_context.notify.clone();
        use_effect_with(
            (store.submissions, store.last_outcome.clone()),
            move |(_, outcome)| {
                match outcome {
                    Some(SubmitOutcome::Created) => {
                        notify.emit(Toast::success("Tokens added"));
                        navigator.push(&Route::Dashboard);
                    }
                    Some(SubmitOutcome::Failed(message)) => notify.emit(Toast::error(message.clone())),
                    _ => {}
                }
                || ()
            },
        );
    }

    let on_action = {
        let store = store.clone();
        Callback::from(move |action: FormAction| store.dispatch(action))
    };

    let on_append = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(FormAction::Append(today())))
    };

    let on_submit = {
        let store = store.clone();
        let notify = toast_context.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match current_session() {
                Ok(session) => store.dispatch(FormAction::Submit(session)),
                Err(e) => notify.emit(Toast::error(e.user_message())),
            }
        })
    };

    let form = &store.form;
    let submitting = form.is_submitting();
    let draw_times = form.catalog().as_slice().to_vec();

    html! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Add Tokens"}</h1>
            <form onsubmit={on_submit} class="bg-white shadow sm:rounded-lg p-6" novalidate={true}>
                { for form.rows().iter().zip(form.row_ids()).enumerate().map(|(index, (draft, row_id))| {
                    let errors = TokenField::ALL
                        .iter()
                        .filter_map(|field| form.visible_error(index, *field).map(|message| (*field, message)))
                        .collect::<Vec<_>>();
                    html! {
                        <TokenRow
                            key={*row_id}
                            {index}
                            draft={draft.clone()}
                            draw_times={draw_times.clone()}
                            {errors}
                            removable={form.can_remove(index)}
                            disabled={submitting}
                            on_action={on_action.clone()}
                        />
                    }
                }) }
                <div class="flex items-center justify-between mt-6">
                    <button
                        type="button"
                        onclick={on_append}
                        disabled={submitting}
                        class="px-4 py-2 rounded-md border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                    >
                        {"Add Row"}
                    </button>
                    <div class="flex items-center space-x-3">
                        <Link<Route> to={Route::Dashboard} classes={classes!("px-4", "py-2", "text-sm", "font-medium", "text-gray-600", "hover:text-gray-900")}>
                            {"Cancel"}
                        </Link<Route>>
                        <button
                            type="submit"
                            disabled={submitting}
                            class="px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 disabled:opacity-50"
                        >
                            { if submitting { "Submitting..." } else { "Submit" } }
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
