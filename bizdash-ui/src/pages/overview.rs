//! Overview Page
//!
//! Headline cards, both charts and the quick insights.

use leptos::*;

use crate::components::{Chart, ChartKind, MetricCard, QuickInsights};
use crate::state::global::GlobalState;

#[component]
pub fn Overview() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let views = state.views;

    let bar = Signal::derive(move || views.with(|v| v.bar.clone()));
    let pie = Signal::derive(move || views.with(|v| v.pie.clone()));
    let insights = Signal::derive(move || views.with(|v| v.insights.clone()));

    view! {
        <section class="overview" aria-label="Overview">
            <div class="metrics-grid">
                {move || {
                    views
                        .with(|v| v.cards.clone())
                        .into_iter()
                        .map(|card| view! { <MetricCard card=card /> })
                        .collect_view()
                }}
            </div>

            <div class="charts-grid">
                <div class="card glass">
                    <div class="card-header">
                        <h3>"Monthly Performance"</h3>
                        <span class="badge">"Bar"</span>
                    </div>
                    <Chart data=bar kind=ChartKind::Bar label="Monthly sales and scaled expenses" />
                </div>
                <div class="card glass">
                    <div class="card-header">
                        <h3>"Revenue by Category"</h3>
                        <span class="badge">"Pie"</span>
                    </div>
                    <Chart data=pie kind=ChartKind::Pie label="Revenue split by category" />
                </div>
            </div>

            <QuickInsights items=insights />
        </section>
    }
}
