use culture_archive_shared::ArchiveIndex;
use yew::prelude::*;

use crate::{
    api,
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner},
    i18n::current::archives as t,
};

#[function_component(ArchivesPage)]
pub fn archives_page() -> Html {
    let archives = use_state(Vec::<ArchiveIndex>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let archives = archives.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_archives().await {
                    Ok(data) => archives.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch archives: {}", e).into(),
                        );
                        error.set(Some(e));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let cell = classes!("px-4", "py-3", "align-top");
    let header_cell = classes!("px-4", "py-3", "text-left", "font-semibold");

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(err) = (*error).clone() {
        html! { <ErrorBanner message={format!("{}: {}", t::LOAD_ERROR, err)} /> }
    } else if archives.is_empty() {
        html! { <p class="py-12 text-center text-[var(--muted)]">{ t::EMPTY }</p> }
    } else {
        html! {
            <div class="overflow-x-auto rounded-2xl border border-[var(--border)] bg-[var(--surface)]">
                <table class="min-w-full text-sm">
                    <thead class="bg-[var(--surface-alt)] text-[var(--muted)]">
                        <tr>
                            <th class={header_cell.clone()}>{ t::COL_CLASS }</th>
                            <th class={header_cell.clone()}>{ t::COL_WEB_NAME }</th>
                            <th class={header_cell.clone()}>{ t::COL_ORG_NAME }</th>
                            <th class={header_cell}>{ t::COL_LINK }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for archives.iter().map(|archive| html! {
                            <tr key={archive.id.to_string()} class="border-t border-[var(--border)]">
                                <td class={cell.clone()}>{ archive.class.clone() }</td>
                                <td class={cell.clone()}>{ archive.web_name.clone() }</td>
                                <td class={cell.clone()}>{ archive.org_name.clone() }</td>
                                <td class={cell.clone()}>
                                    <a
                                        href={archive.org_web_link.clone()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-[var(--primary)] hover:underline"
                                    >
                                        { archive.org_web_link.clone() }
                                    </a>
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <main class="mx-auto max-w-6xl px-4 py-8">
            <h1 class="mb-6 text-2xl font-semibold">{ t::TITLE }</h1>
            { body }
        </main>
    }
}
