use crate::layout::global_context::{sub_memo, use_session};
use crate::shared::components::chart::Chart;
use crate::shared::components::data_table::TitledDataTable;
use crate::shared::components::metric_grid::MetricGrid;
use crate::shared::components::ui::Select;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::Utc;
use contracts::shared::session::{keys, Action};
use contracts::shared::view_tree::{PageView, ViewTree};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexGap};

/// Report generation, quick statistics, activity charts and report history
#[component]
pub fn ReportsPage() -> impl IntoView {
    let ctx = use_session();
    let Some(page) = sub_memo(ctx.tree, |t: &ViewTree| t.page().and_then(PageView::as_reports)) else {
        return ().into_any();
    };

    let generate = move |_| {
        let _ = ctx.dispatch(Action::GenerateReport {
            at: Utc::now().naive_utc(),
        });
    };

    view! {
        <PageFrame page_id="d401_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=Signal::derive(move || page.with(|v| v.title.clone())) />
            <div class="page__content">
                <div class="filter-row">
                    <Select
                        id="report-type"
                        select=Signal::derive(move || page.with(|v| v.report_type.clone()))
                        on_change=Callback::new(move |code: String| ctx.set_widget(keys::REPORT_TYPE, code))
                    />
                    <Select
                        id="report-period"
                        select=Signal::derive(move || page.with(|v| v.period.clone()))
                        on_change=Callback::new(move |code: String| ctx.set_widget(keys::REPORT_PERIOD, code))
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=generate>
                        {move || page.with(|v| v.generate_label.clone())}
                    </Button>
                </div>

                <h3 class="section__title">{move || page.with(|v| v.stats_title.clone())}</h3>
                <MetricGrid metrics=Signal::derive(move || page.with(|v| v.stats.clone())) />

                <div class="chart-row">
                    <Chart chart=Signal::derive(move || page.with(|v| v.monthly.clone())) />
                    <Chart chart=Signal::derive(move || page.with(|v| v.user_activity.clone())) />
                </div>

                <TitledDataTable table=Signal::derive(move || page.with(|v| v.history.clone())) />

                // Export actions are placeholders
                <Flex gap=FlexGap::Small>
                    {move || {
                        page.with(|v| v.actions.clone())
                            .into_iter()
                            .map(|label| view! {
                                <Button appearance=ButtonAppearance::Secondary>{label}</Button>
                            })
                            .collect_view()
                    }}
                </Flex>
            </div>
        </PageFrame>
    }
    .into_any()
}
