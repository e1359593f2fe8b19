//! Top bar: sidebar toggle, application title and engagement subtitle.

use crate::layout::global_context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_session();
    let header = Memo::new(move |_| ctx.tree.with(|t| t.app().map(|a| a.header.clone())));
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                aria-pressed=move || is_sidebar_visible().to_string()
            >
                "☰"
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">
                    {move || header.get().map(|h| h.title).unwrap_or_default()}
                </span>
                <span class="top-header__subtitle">
                    {move || header.get().map(|h| h.subtitle).unwrap_or_default()}
                </span>
            </div>
        </div>
    }
}
