use chrono::NaiveDate;
use shared::{DrawTime, DrawTimeId, TokenField, TokenSetDraft};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::state::FormAction;

#[derive(Properties, Clone, PartialEq)]
pub struct TokenRowProps {
    pub index: usize,
    pub draft: TokenSetDraft,
    pub draw_times: Vec<DrawTime>,
    /// Messages for fields the user has already left.
    pub errors: Vec<(TokenField, &'static str)>,
    pub removable: bool,
    pub disabled: bool,
    pub on_action: Callback<FormAction>,
}

impl TokenRowProps {
    fn error_for(&self, field: TokenField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }
}

fn field_error(message: Option<&'static str>) -> Html {
    match message {
        Some(message) => html! { <p class="mt-1 text-xs text-red-600">{message}</p> },
        None => html! {},
    }
}

fn input_classes(has_error: bool) -> Classes {
    classes!(
        "w-full", "px-3", "py-2", "border", "rounded-md", "text-sm",
        "focus:outline-none", "focus:ring-2", "focus:ring-blue-500",
        if has_error { "border-red-500" } else { "border-gray-300" }
    )
}

/// Heading shown above each row, numbered from 1.
pub fn row_heading(index: usize) -> String {
    format!("Token {}", index + 1)
}

#[function_component(TokenRow)]
pub fn token_row(props: &TokenRowProps) -> Html {
    let index = props.index;

    let on_token_number = props.on_action.reform(move |e: InputEvent| {
        FormAction::TokenNumber(index, e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_count = props.on_action.reform(move |e: InputEvent| {
        FormAction::Count(index, e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_draw_time = props.on_action.reform(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        FormAction::DrawTime(index, (!value.is_empty()).then(|| DrawTimeId::from(value)))
    });
    let on_date = props.on_action.reform(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        FormAction::Date(index, NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok())
    });
    let on_blur = |field: TokenField| props.on_action.reform(move |_: FocusEvent| FormAction::Blur(index, field));
    let on_remove = props.on_action.reform(move |_: MouseEvent| FormAction::Remove(index));

    let selected = props.draft.draw_time.clone();
    let select_ref = use_node_ref();

    // `selected` is only an attribute; the live value must be pushed as a property
    {
        let select_ref = select_ref.clone();
        let value = selected.as_ref().map(|id| id.to_string()).unwrap_or_default();
        use_effect_with((value, props.draw_times.clone()), move |(value, _)| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(value);
            }
            || ()
        });
    }

    let date_value = props
        .draft
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let number_error = props.error_for(TokenField::TokenNumber);
    let count_error = props.error_for(TokenField::Count);
    let draw_time_error = props.error_for(TokenField::DrawTime);
    let date_error = props.error_for(TokenField::Date);

    html! {
        <div class="py-3 border-b border-gray-100">
            <h3 class="text-sm font-semibold text-gray-800 mb-2">{row_heading(index)}</h3>
            <div class="grid grid-cols-1 sm:grid-cols-5 gap-3 items-start">
                <div>
                    <label class="block text-xs font-medium text-gray-600 mb-1">{"Token Number"}</label>
                    <input
                        type="text"
                        inputmode="numeric"
                        name={TokenField::TokenNumber.name()}
                        class={input_classes(number_error.is_some())}
                        value={props.draft.token_number.clone()}
                        disabled={props.disabled}
                        oninput={on_token_number}
                        onblur={on_blur(TokenField::TokenNumber)}
                    />
                    {field_error(number_error)}
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-600 mb-1">{"Token Count"}</label>
                    <input
                        type="text"
                        inputmode="numeric"
                        name={TokenField::Count.name()}
                        class={input_classes(count_error.is_some())}
                        value={props.draft.count.clone()}
                        disabled={props.disabled}
                        oninput={on_count}
                        onblur={on_blur(TokenField::Count)}
                    />
                    {field_error(count_error)}
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-600 mb-1">{"Draw Time"}</label>
                    <select
                        ref={select_ref}
                        name={TokenField::DrawTime.name()}
                        class={input_classes(draw_time_error.is_some())}
                        disabled={props.disabled}
                        onchange={on_draw_time}
                        onblur={on_blur(TokenField::DrawTime)}
                    >
                        <option value="" selected={selected.is_none()}>{"Select draw time"}</option>
                        { for props.draw_times.iter().map(|draw_time| html! {
                            <option
                                key={draw_time.id.to_string()}
                                value={draw_time.id.to_string()}
                                selected={selected.as_ref() == Some(&draw_time.id)}
                            >
                                {&draw_time.time_of_day}
                            </option>
                        }) }
                    </select>
                    {field_error(draw_time_error)}
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-600 mb-1">{"Date"}</label>
                    <input
                        type="date"
                        name={TokenField::Date.name()}
                        class={input_classes(date_error.is_some())}
                        value={date_value}
                        disabled={props.disabled}
                        onchange={on_date}
                        onblur={on_blur(TokenField::Date)}
                    />
                    {field_error(date_error)}
                </div>
                <div class="flex sm:justify-end sm:pt-6">
                    if props.removable {
                        <button
                            type="button"
                            onclick={on_remove}
                            disabled={props.disabled}
                            class="px-3 py-2 text-sm text-red-600 border border-red-300 rounded-md hover:bg-red-50 disabled:opacity-50"
                        >
                            {"Remove"}
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}
