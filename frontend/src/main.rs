//! Browser dashboard for the culture archive: the merged article and
//! photograph list plus a read-only view of the archive index.
//!
//! Build with `--features mock` to run against bundled sample data.

mod api;
mod components;
mod i18n;
mod models;
mod pages;
mod router;
mod session;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
