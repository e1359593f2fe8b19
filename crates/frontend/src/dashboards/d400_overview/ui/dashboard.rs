use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::chart::Chart;
use crate::shared::components::data_table::TitledDataTable;
use crate::shared::components::metric_grid::MetricGrid;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::shared::view_tree::{PageView, ViewTree};
use leptos::prelude::*;

/// Overview dashboard: metric cards, category pie, activity timeline, recent activity
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_session();
    let Some(page) = sub_memo(ctx.tree, |t: &ViewTree| t.page().and_then(PageView::as_dashboard)) else {
        return ().into_any();
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=Signal::derive(move || page.with(|v| v.title.clone())) />
            <div class="page__content">
                <MetricGrid metrics=Signal::derive(move || page.with(|v| v.metrics.clone())) />
                <div class="chart-row">
                    <Chart chart=Signal::derive(move || page.with(|v| v.category_chart.clone())) />
                    <Chart chart=Signal::derive(move || page.with(|v| v.timeline_chart.clone())) />
                </div>
                <TitledDataTable table=Signal::derive(move || page.with(|v| v.recent.clone())) />
            </div>
        </PageFrame>
    }
    .into_any()
}
