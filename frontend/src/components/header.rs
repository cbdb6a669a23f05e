use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::nav as t, router::Route};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();

    let link_class = |target: &Route| {
        let mut class = classes!("rounded-lg", "px-3", "py-2", "text-sm", "transition");
        if route.as_ref() == Some(target) {
            class.push("bg-[var(--surface-alt)]");
            class.push("font-semibold");
        } else {
            class.push("text-[var(--muted)]");
            class.push("hover:text-[var(--text)]");
        }
        class
    };

    html! {
        <header class="sticky top-0 z-30 border-b border-[var(--border)] bg-[var(--surface)]/90 backdrop-blur">
            <nav class="mx-auto flex max-w-6xl items-center gap-2 px-4 py-3">
                <Link<Route> to={Route::Dashboard} classes={link_class(&Route::Dashboard)}>
                    { t::DASHBOARD }
                </Link<Route>>
                <Link<Route> to={Route::Archives} classes={link_class(&Route::Archives)}>
                    { t::ARCHIVES }
                </Link<Route>>
            </nav>
        </header>
    }
}
