use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::ui::{Input, Select};
use contracts::shared::session::keys;
use contracts::shared::view_tree::{FaqEntryView, PageView, ViewTree};
use leptos::prelude::*;

fn entry_list(entries: Vec<FaqEntryView>) -> impl IntoView {
    entries
        .into_iter()
        .map(|e| {
            view! {
                <details class="faq__entry">
                    <summary>{e.question}</summary>
                    <p>{e.answer}</p>
                </details>
            }
        })
        .collect_view()
}

#[component]
pub fn FaqTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tab) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_training)
            .and_then(|v| v.tab.as_faq())
    }) else {
        return ().into_any();
    };

    view! {
        <Select
            id="faq-category"
            select=Signal::derive(move || tab.with(|v| v.category.clone()))
            on_change=Callback::new(move |category: String| ctx.set_widget(keys::FAQ_CATEGORY, category))
        />
        <div class="faq">{move || entry_list(tab.with(|v| v.entries.clone()))}</div>

        <section class="section">
            <Input
                id="faq-search"
                label=Signal::derive(move || tab.with(|v| v.search.label.clone()))
                value=Signal::derive(move || tab.with(|v| v.search.value.clone()))
                on_input=Callback::new(move |query: String| ctx.set_widget(keys::FAQ_SEARCH, query))
            />
            <div class="faq">{move || entry_list(tab.with(|v| v.search_results.clone()))}</div>
            {move || tab.with(|v| v.no_matches.clone()).map(|text| view! { <p class="faq__empty">{text}</p> })}
        </section>
    }
    .into_any()
}
