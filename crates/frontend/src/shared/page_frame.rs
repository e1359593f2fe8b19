//! Standard root wrapper for every page in the content area.

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets `id`, `data-page-category` and the BEM modifier class.
#[component]
pub fn PageFrame(
    /// `{page}--{category}`, e.g. `"a001_record--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_LIST | PAGE_CAT_SYSTEM => "page",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

/// Page header row: title on the left, optional actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <h2 class="page__title">{title}</h2>
            <div class="page__actions">{children.map(|c| c())}</div>
        </div>
    }
}
