//! Content dashboard: articles and photographs in one list, newest update
//! first, with an admin-only delete action.

use culture_archive_shared::{
    dashboard::can_delete,
    ContentItem, ContentKind, DashboardState, FeedOutcome,
};
use yew::prelude::*;

use crate::{
    api,
    components::{
        content_table::ContentTable,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::{current::dashboard as t, fill_one},
    session,
};

fn confirm_template(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Article => t::CONFIRM_DELETE_ARTICLE_TEMPLATE,
        ContentKind::Photograph => t::CONFIRM_DELETE_PHOTOGRAPH_TEMPLATE,
    }
}

fn deleted_message(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Article => t::DELETED_ARTICLE,
        ContentKind::Photograph => t::DELETED_PHOTOGRAPH,
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_state(DashboardState::default);
    let deleting = use_state(|| false);
    let role = use_memo((), |_| session::cached_role());
    let load_seq = use_mut_ref(|| 0_u64);

    let reload = {
        let state = state.clone();
        let load_seq = load_seq.clone();
        Callback::from(move |_: ()| {
            let request_id = {
                let mut seq = load_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            let mut loading = DashboardState::default();
            loading.begin_load();
            state.set(loading.clone());

            let state = state.clone();
            let load_seq = load_seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (articles, photographs) =
                    futures::join!(api::fetch_articles(), api::fetch_photographs());
                // 較新的載入已開始時丟棄本次結果
                if *load_seq.borrow() != request_id {
                    return;
                }
                let mut next = loading;
                next.finish_load(FeedOutcome::from_envelopes(articles, photographs));
                if let Some(reason) = next.error() {
                    web_sys::console::error_1(
                        &format!("Failed to load dashboard feeds: {}", reason).into(),
                    );
                }
                state.set(next);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let on_delete = {
        let reload = reload.clone();
        let deleting = deleting.clone();
        Callback::from(move |item: ContentItem| {
            if *deleting {
                return;
            }
            let kind = item.kind();
            if !confirm(&fill_one(confirm_template(kind), item.title())) {
                return;
            }

            let reload = reload.clone();
            let deleting = deleting.clone();
            let id = item.id().to_string();
            deleting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_content(kind, &id).await {
                    Ok(message) => {
                        alert(message.as_deref().unwrap_or(deleted_message(kind)));
                        reload.emit(());
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to delete {} {}: {}", kind, id, err).into(),
                        );
                        alert(&fill_one(t::DELETE_FAILED_TEMPLATE, err));
                    },
                }
                deleting.set(false);
            });
        })
    };

    let body = match &*state {
        DashboardState::Idle | DashboardState::Loading => html! {
            <LoadingSpinner size={SpinnerSize::Medium} />
        },
        DashboardState::Errored(_) => html! {
            <ErrorBanner message={t::LOAD_ERROR} />
        },
        DashboardState::Ready(items) if items.is_empty() => html! {
            <p class="py-12 text-center text-[var(--muted)]">{ t::EMPTY }</p>
        },
        DashboardState::Ready(items) => html! {
            <ContentTable
                items={items.clone()}
                can_delete={can_delete(role.as_deref())}
                on_delete={on_delete}
                busy={*deleting}
            />
        },
    };

    html! {
        <main class="mx-auto max-w-6xl px-4 py-8">
            <h1 class="mb-6 text-2xl font-semibold">{ t::TITLE }</h1>
            { body }
            if *deleting {
                <LoadingSpinner size={SpinnerSize::Small} fullscreen={true} label={t::DELETING} />
            }
        </main>
    }
}
