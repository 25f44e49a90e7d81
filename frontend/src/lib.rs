use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::session::current_session;

pub mod api;
pub mod components;
pub mod config;
pub mod session;
pub mod state;
pub mod pages {
    pub mod add_token;
    pub mod dashboard;
    pub mod not_found;
}

use pages::{add_token::AddToken, dashboard::Dashboard, not_found::NotFound};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/tokens/new")]
    AddToken,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="app-container min-h-screen bg-gray-100">
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Renders its children only while an agent session is stored.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    match current_session() {
        Ok(_) => html! { <>{props.children.clone()}</> },
        Err(e) => html! {
            <div class="max-w-xl mx-auto mt-16 p-6 bg-white shadow rounded-lg text-center">
                <h2 class="text-lg font-semibold text-gray-900">{"Sign in required"}</h2>
                <p class="mt-2 text-sm text-gray-600">{e.user_message()}</p>
            </div>
        },
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Dashboard => html! {
            <ProtectedRoute>
                <Dashboard />
            </ProtectedRoute>
        },
        Route::AddToken => html! {
            <ProtectedRoute>
                <AddToken />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
