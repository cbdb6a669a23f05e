use culture_archive_shared::{
    dashboard::format_date,
    ContentItem, ContentKind,
};
use yew::prelude::*;

use crate::i18n::current::dashboard as t;

#[derive(Properties, PartialEq)]
pub struct ContentTableProps {
    pub items: Vec<ContentItem>,
    /// Shows the delete action on every row.
    #[prop_or(false)]
    pub can_delete: bool,
    #[prop_or_default]
    pub on_delete: Callback<ContentItem>,
    /// Disables delete buttons while a request is in flight.
    #[prop_or(false)]
    pub busy: bool,
}

pub fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Article => t::KIND_ARTICLE,
        ContentKind::Photograph => t::KIND_PHOTOGRAPH,
    }
}

fn kind_badge_class(kind: ContentKind) -> Classes {
    let tone = match kind {
        ContentKind::Article => "bg-sky-100 text-sky-800 dark:bg-sky-900/40 dark:text-sky-200",
        ContentKind::Photograph => {
            "bg-amber-100 text-amber-800 dark:bg-amber-900/40 dark:text-amber-200"
        },
    };
    classes!("inline-flex", "rounded-full", "px-2.5", "py-0.5", "text-xs", "font-medium", tone)
}

#[function_component(ContentTable)]
pub fn content_table(props: &ContentTableProps) -> Html {
    let header_cell = classes!("px-4", "py-3", "text-left", "font-semibold", "whitespace-nowrap");
    let cell = classes!("px-4", "py-3", "align-top");

    let rows = props.items.iter().map(|item| {
        let date = item
            .effective_date()
            .map(format_date)
            .unwrap_or_else(|| t::NOT_PUBLISHED.to_string());

        let delete_button = if props.can_delete {
            let on_delete = props.on_delete.clone();
            let target = item.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(target.clone()));
            html! {
                <button
                    type="button"
                    class="rounded-lg px-3 py-1 text-sm text-red-600 transition hover:bg-red-50 disabled:opacity-50 dark:hover:bg-red-900/30"
                    disabled={props.busy}
                    {onclick}
                >
                    { t::DELETE }
                </button>
            }
        } else {
            Html::default()
        };

        html! {
            <tr key={item.display_key()} class="border-t border-[var(--border)]">
                <td class={cell.clone()}>
                    <span class={kind_badge_class(item.kind())}>{ kind_label(item.kind()) }</span>
                </td>
                <td class={cell.clone()}>
                    <div class="font-medium text-[var(--text)]">{ item.title() }</div>
                    <div class="text-xs text-[var(--muted)]">{ item.secondary_text() }</div>
                </td>
                <td class={cell.clone()}>{ item.author() }</td>
                <td class={cell.clone()}>{ date }</td>
                <td class={cell.clone()}>{ format_date(item.updated_at()) }</td>
                <td class={classes!(cell.clone(), "whitespace-nowrap")}>
                    <a
                        href={item.edit_path()}
                        class="rounded-lg px-3 py-1 text-sm text-[var(--primary)] transition hover:bg-[var(--surface-alt)]"
                    >
                        { t::EDIT }
                    </a>
                    { delete_button }
                </td>
            </tr>
        }
    });

    html! {
        <div class="overflow-x-auto rounded-2xl border border-[var(--border)] bg-[var(--surface)]">
            <table class="min-w-full text-sm">
                <thead class="bg-[var(--surface-alt)] text-[var(--muted)]">
                    <tr>
                        <th class={header_cell.clone()}>{ t::COL_KIND }</th>
                        <th class={header_cell.clone()}>{ t::COL_TITLE }</th>
                        <th class={header_cell.clone()}>{ t::COL_AUTHOR }</th>
                        <th class={header_cell.clone()}>{ t::COL_DATE }</th>
                        <th class={header_cell.clone()}>{ t::COL_UPDATED }</th>
                        <th class={header_cell}>{ t::COL_ACTIONS }</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows }
                </tbody>
            </table>
        </div>
    }
}
