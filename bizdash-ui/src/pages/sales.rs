//! Sales Page

use bizdash::render::SALES_SUMMARY;
use leptos::*;

use crate::components::{Chart, ChartKind};
use crate::state::global::GlobalState;

#[component]
pub fn Sales() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let chart = Signal::derive(move || state.views.with(|v| v.sales_bar.clone()));

    view! {
        <section class="card glass" aria-label="Sales">
            <div class="card-header">
                <h3>"Sales"</h3>
            </div>
            <p class="summary">{SALES_SUMMARY}</p>
            <Chart data=chart kind=ChartKind::Bar label="Monthly sales" />
        </section>
    }
}
