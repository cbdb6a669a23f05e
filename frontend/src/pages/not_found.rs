use yew::prelude::*;

use crate::i18n::current::not_found as t;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="mx-auto max-w-6xl px-4 py-12">
            <h2 class="text-2xl font-semibold">{ t::TITLE }</h2>
            <p class="mt-2 text-[var(--muted)]">{ t::BODY }</p>
        </main>
    }
}
