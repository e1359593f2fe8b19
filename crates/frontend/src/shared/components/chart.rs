//! SVG charts for [`ChartView`]: pie, vertical bars and a polyline.

use contracts::dashboards::d400_overview::dto::ChartKind;
use contracts::shared::view_tree::ChartView;
use leptos::prelude::*;

const WIDTH: f64 = 360.0;
const HEIGHT: f64 = 200.0;
const PALETTE: [&str; 7] = [
    "#4f8cff", "#34c38f", "#f1b44c", "#f46a6a", "#50a5f1", "#8e6cef", "#e83e8c",
];

fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

fn scaled(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64 * (HEIGHT - 20.0)
    }
}

fn bars(chart: &ChartView) -> AnyView {
    let n = chart.points.len().max(1) as f64;
    let slot = WIDTH / n;
    let max = chart.max;
    chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let h = scaled(p.value, max);
            let x = i as f64 * slot + slot * 0.15;
            view! {
                <g>
                    <rect x=x y={HEIGHT - h} width={slot * 0.7} height=h fill=color(0) />
                    <text x=x y={HEIGHT + 14.0} font-size="10" fill="currentColor">{p.label.clone()}</text>
                </g>
            }
        })
        .collect_view()
        .into_any()
}

fn line(chart: &ChartView) -> AnyView {
    let n = chart.points.len().saturating_sub(1).max(1) as f64;
    let max = chart.max;
    let points = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", i as f64 / n * WIDTH, HEIGHT - scaled(p.value, max)))
        .collect::<Vec<_>>()
        .join(" ");
    view! {
        <polyline points=points fill="none" stroke=color(0) stroke-width="2" />
    }
    .into_any()
}

fn pie(chart: &ChartView) -> AnyView {
    let (cx, cy, r) = (HEIGHT / 2.0, HEIGHT / 2.0, HEIGHT / 2.0 - 10.0);
    let total = chart.total.max(1) as f64;
    let mut start = -std::f64::consts::FRAC_PI_2;
    let slices = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let sweep = p.value as f64 / total * std::f64::consts::TAU;
            let end = start + sweep;
            let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large = if sweep > std::f64::consts::PI { 1 } else { 0 };
            start = end;
            let d = format!("M{cx},{cy} L{x1:.2},{y1:.2} A{r},{r} 0 {large} 1 {x2:.2},{y2:.2} Z");
            view! {
                <path d=d fill=color(i) />
            }
        })
        .collect_view();
    let legend = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let y = 16.0 + i as f64 * 18.0;
            view! {
                <g>
                    <rect x={HEIGHT + 20.0} y={y - 10.0} width="10" height="10" fill=color(i) />
                    <text x={HEIGHT + 36.0} y=y font-size="11" fill="currentColor">
                        {format!("{} ({})", p.label, p.value)}
                    </text>
                </g>
            }
        })
        .collect_view();
    view! { <g>{slices}{legend}</g> }.into_any()
}

#[component]
pub fn Chart(#[prop(into)] chart: Signal<ChartView>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h4 class="chart-card__title">{move || chart.with(|c| c.title.clone())}</h4>
            <svg
                class="chart-card__svg"
                viewBox=format!("0 0 {} {}", WIDTH, HEIGHT + 20.0)
                preserveAspectRatio="xMidYMid meet"
            >
                {move || chart.with(|c| match c.kind {
                    ChartKind::Bar => bars(c),
                    ChartKind::Line => line(c),
                    ChartKind::Pie => pie(c),
                })}
            </svg>
        </div>
    }
}
