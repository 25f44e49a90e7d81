//! Transient notifications shown in the top-right corner.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

const SUCCESS_MS: u32 = 5000;
const ERROR_MS: u32 = 8000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    /// Milliseconds before the toast dismisses itself.
    pub lifetime_ms: u32,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ToastKind::Success,
            message: message.into(),
            lifetime_ms: SUCCESS_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ToastKind::Error,
            message: message.into(),
            lifetime_ms: ERROR_MS,
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastAction {
    Show(Toast),
    Dismiss(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Show(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub notify: Callback<Toast>,
    pub dismiss: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let notify = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            let lifetime_ms = toast.lifetime_ms;
            dispatcher.dispatch(ToastAction::Show(toast));

            let dispatcher = dispatcher.clone();
            Timeout::new(lifetime_ms, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
        })
    };

    let context = ToastContext {
        notify,
        dismiss: dismiss.clone(),
    };

    html! {
        <ContextProvider<ToastContext> {context}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 space-y-2" role="status">
                { for queue.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let (tone, icon) = match toast.kind {
                        ToastKind::Success => ("bg-green-500 border-green-600", "✓"),
                        ToastKind::Error => ("bg-red-500 border-red-600", "✕"),
                    };
                    html! {
                        <div
                            key={id.to_string()}
                            class={classes!("flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md", tone)}
                        >
                            <span class="mr-3 text-lg font-bold">{icon}</span>
                            <p class="flex-1 text-sm font-medium">{&toast.message}</p>
                            <button
                                type="button"
                                class="ml-3 text-lg hover:text-gray-200"
                                onclick={dismiss.reform(move |_: MouseEvent| id)}
                            >
                                {"×"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}
