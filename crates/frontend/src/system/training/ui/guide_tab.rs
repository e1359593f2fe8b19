use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::ui::Select;
use contracts::shared::session::keys;
use contracts::shared::view_tree::{PageView, ViewTree};
use leptos::prelude::*;

#[component]
pub fn GuideTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tab) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_training)
            .and_then(|v| v.tab.as_guide())
    }) else {
        return ().into_any();
    };

    view! {
        <Select
            id="guide-section"
            select=Signal::derive(move || tab.with(|v| v.section.clone()))
            on_change=Callback::new(move |title: String| ctx.set_widget(keys::GUIDE_SECTION, title))
        />
        <article class="guide">
            <h3>{move || tab.with(|v| v.heading.clone())}</h3>
            {move || {
                tab.with(|v| v.paragraphs.clone())
                    .into_iter()
                    .map(|p| view! { <p>{p}</p> })
                    .collect_view()
            }}
        </article>
    }
    .into_any()
}
