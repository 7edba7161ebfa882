//! Expenses Page

use leptos::*;

use crate::components::QuickInsights;
use crate::state::global::GlobalState;

#[component]
pub fn Expenses() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let chips = Signal::derive(move || state.views.with(|v| v.expense_chips.clone()));

    view! { <QuickInsights items=chips title="Expenses" show_glyph=false /> }
}
