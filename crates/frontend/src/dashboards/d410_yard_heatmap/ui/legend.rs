use leptos::prelude::*;

use crate::dashboards::d410_yard_heatmap::heat::{
    GradientVariant, EMPTY_COLOR, FILTERED_COLOR, INACTIVE_COLOR,
};
use crate::dashboards::d410_yard_heatmap::summary::YardSummary;

#[component]
fn LegendItem(#[prop(into)] color: Signal<String>, label: &'static str) -> impl IntoView {
    view! {
        <div class="heatmap-legend__item">
            <div
                class="heatmap-legend__swatch"
                style=move || format!("background-color: {};", color.get())
            ></div>
            {label}
        </div>
    }
}

#[component]
pub fn HeatmapLegend(#[prop(into)] gradient: Signal<GradientVariant>) -> impl IntoView {
    view! {
        <div class="heatmap-legend">
            <LegendItem color=Signal::derive(move || gradient.get().color_at(0.0)) label="Oldest Unit" />
            <LegendItem color=Signal::derive(move || gradient.get().newest_color()) label="Newest Unit" />
            <LegendItem color=FILTERED_COLOR.to_string() label="Filtered Out" />
            <LegendItem color=EMPTY_COLOR.to_string() label="Free" />
            <LegendItem color=INACTIVE_COLOR.to_string() label="Inactive" />
        </div>
    }
}

/// Occupancy counters
#[component]
pub fn SummaryStrip(#[prop(into)] summary: Signal<YardSummary>) -> impl IntoView {
    let item = move |label: &'static str, value: Signal<String>| {
        view! {
            <div class="summary-strip__item">
                <span class="summary-strip__label">{label}</span>
                <span class="summary-strip__value">{move || value.get()}</span>
            </div>
        }
    };

    view! {
        <div class="summary-strip">
            {item("Slots", Signal::derive(move || summary.get().total.to_string()))}
            {item("Active", Signal::derive(move || summary.get().active.to_string()))}
            {item("Occupied", Signal::derive(move || summary.get().occupied.to_string()))}
            {item("Free", Signal::derive(move || summary.get().free.to_string()))}
            {item(
                "Utilization",
                Signal::derive(move || format!("{}%", summary.get().utilization_percent())),
            )}
            {item("Filtered", Signal::derive(move || summary.get().filtered_out.to_string()))}
        </div>
    }
}
