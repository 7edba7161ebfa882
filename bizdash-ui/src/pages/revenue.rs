//! Revenue Page

use bizdash::render::REVENUE_SUMMARY;
use leptos::*;

use crate::components::{Chart, ChartKind};
use crate::state::global::GlobalState;

#[component]
pub fn Revenue() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let chart = Signal::derive(move || state.views.with(|v| v.pie.clone()));

    view! {
        <section class="card glass" aria-label="Revenue">
            <div class="card-header">
                <h3>"Revenue"</h3>
            </div>
            <p class="summary">{REVENUE_SUMMARY}</p>
            <Chart data=chart kind=ChartKind::Pie label="Revenue split by category" height=300 />
        </section>
    }
}
