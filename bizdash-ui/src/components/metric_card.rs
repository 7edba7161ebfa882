//! Metric Card Component
//!
//! Displays a single headline value with accent and icon.

use bizdash::MetricCardModel;
use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(card: MetricCardModel) -> impl IntoView {
    view! {
        <div
            class=format!("card glass metric {}", card.accent.as_str())
            role="group"
            aria-label=card.aria_label
        >
            <div class="metric-top">
                <div class="metric-icon" aria-hidden="true">{card.icon}</div>
                <span class="metric-title">{card.title}</span>
            </div>
            <div class="metric-value">{card.value}</div>
        </div>
    }
}
