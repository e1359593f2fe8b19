use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::data_table::TitledDataTable;
use crate::shared::components::metric_grid::MetricGrid;
use contracts::shared::view_tree::{PageView, ViewTree};
use leptos::prelude::*;

#[component]
pub fn ModulesTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tab) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_training)
            .and_then(|v| v.tab.as_modules())
    }) else {
        return ().into_any();
    };
    let percent = move || tab.with(|v| (v.progress * 100.0).round());

    view! {
        <h3 class="section__title">{move || tab.with(|v| v.progress_title.clone())}</h3>
        <MetricGrid metrics=Signal::derive(move || tab.with(|v| v.metrics.clone())) />
        <div class="progress">
            <div class="progress__bar" style:width=move || format!("{}%", percent())></div>
        </div>
        <p class="progress__label">{move || format!("{}%", percent())}</p>
        <TitledDataTable table=Signal::derive(move || tab.with(|v| v.modules.clone())) />
    }
    .into_any()
}
