use yew::prelude::*;

use crate::i18n::current::error_banner as t;

/// 頁面內的錯誤提示。使用者可關閉，訊息變更時重新顯示。
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    if !*is_open || props.message.trim().is_empty() {
        return Html::default();
    }

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    html! {
        <div
            class="error-banner flex w-full max-w-2xl items-start gap-3 rounded-2xl px-5 py-4 text-sm shadow-xl"
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
            <div class="flex-1 space-y-1">
                <p class="text-base font-semibold">{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="ml-4 inline-flex h-8 w-8 items-center justify-center rounded-full text-lg transition hover:bg-black/10 dark:hover:bg-white/15"
                aria-label={t::CLOSE_ARIA}
                onclick={close}
            >
                {"×"}
            </button>
        </div>
    }
}
