use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Dashboard);

    let link_classes = |route: Route| {
        classes!(
            "px-3", "py-2", "rounded-md", "text-sm", "font-medium", "transition-colors", "duration-200",
            if current_route == route { "bg-white/20" } else { "hover:bg-white/10" }
        )
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-40", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <Link<Route> to={Route::Dashboard} classes={classes!("text-lg", "font-semibold")}>
                        {"Agent Tokens"}
                    </Link<Route>>
                    <div class={classes!("flex", "items-center", "space-x-2")}>
                        <Link<Route> to={Route::Dashboard} classes={link_classes(Route::Dashboard)}>
                            {"Dashboard"}
                        </Link<Route>>
                        <Link<Route> to={Route::AddToken} classes={link_classes(Route::AddToken)}>
                            {"Add Token"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
