//! Quick Insights Component
//!
//! A card of compact `{title, value, trend}` chips.

use bizdash::Insight;
use leptos::*;

/// Insight chip list
#[component]
pub fn QuickInsights(
    #[prop(into)]
    items: Signal<Vec<Insight>>,
    #[prop(default = "Quick Insights")]
    title: &'static str,
    /// Prefix values with the trend glyph
    #[prop(default = true)]
    show_glyph: bool,
) -> impl IntoView {
    view! {
        <section class="card glass insights" aria-label=title>
            <div class="card-header">
                <h3>{title}</h3>
            </div>
            <div class="insights-grid" role="list">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| view! { <InsightChip item=item show_glyph=show_glyph /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// Single chip
#[component]
fn InsightChip(item: Insight, show_glyph: bool) -> impl IntoView {
    let value = if show_glyph {
        item.display_value()
    } else {
        item.value.clone()
    };

    view! {
        <div class=format!("insight {}", item.trend.as_str()) role="listitem" tabindex="0">
            <div class="insight-title">{item.title}</div>
            <div class="insight-value">{value}</div>
        </div>
    }
}
