use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::data_table::TitledDataTable;
use crate::shared::components::metric_grid::MetricGrid;
use contracts::shared::view_tree::{PageView, ViewTree};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn SecurityTab() -> impl IntoView {
    let ctx = use_session();
    let Some(tab) = sub_memo(ctx.tree, |t: &ViewTree| {
        t.page()
            .and_then(PageView::as_admin)
            .and_then(|a| a.tab.as_security())
    }) else {
        return ().into_any();
    };

    view! {
        <h3 class="section__title">{move || tab.with(|v| v.title.clone())}</h3>
        <MetricGrid metrics=Signal::derive(move || tab.with(|v| v.metrics.clone())) />
        <TitledDataTable table=Signal::derive(move || tab.with(|v| v.log.clone())) />
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=move |_| log::info!("security scan requested")
        >
            {move || tab.with(|v| v.scan_label.clone())}
        </Button>
    }
    .into_any()
}
