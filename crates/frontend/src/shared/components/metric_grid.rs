use contracts::shared::view_tree::MetricView;
use leptos::prelude::*;

fn delta_class(delta: &str) -> &'static str {
    if delta.starts_with('+') {
        "stat-card__change stat-card__change--up"
    } else if delta.starts_with('-') {
        "stat-card__change stat-card__change--down"
    } else {
        "stat-card__change stat-card__change--flat"
    }
}

#[component]
pub fn StatCard(metric: MetricView) -> impl IntoView {
    let cls = delta_class(&metric.delta);
    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{metric.label}</div>
                <div class="stat-card__value">{metric.value}</div>
                {(!metric.delta.is_empty()).then(|| view! {
                    <span class=cls>{metric.delta.clone()}</span>
                })}
            </div>
        </div>
    }
}

/// Row of metric cards
#[component]
pub fn MetricGrid(#[prop(into)] metrics: Signal<Vec<MetricView>>) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {move || {
                metrics
                    .get()
                    .into_iter()
                    .map(|metric| view! { <StatCard metric=metric /> })
                    .collect_view()
            }}
        </div>
    }
}
