//! Sidebar Component
//!
//! Brand plus the five tab links. Holds no state: the active entry comes in
//! as a prop and clicks are reported through `on_navigate`.

use bizdash::render::{sidebar, BRAND};
use bizdash::Tab;
use leptos::*;

/// Navigation sidebar
#[component]
pub fn Sidebar(
    /// Tab to mark as active
    #[prop(into)]
    current_tab: Signal<Tab>,
    /// Called with the clicked tab's key
    #[prop(into)]
    on_navigate: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <aside class="sidebar" aria-label="Sidebar navigation">
            <div class="sidebar-brand">
                <div class="logo" aria-hidden="true">"📊"</div>
                <span class="brand-text">{BRAND}</span>
            </div>

            <nav class="sidebar-nav">
                {move || {
                    sidebar(current_tab.get())
                        .into_iter()
                        .map(|entry| {
                            let key = entry.tab.key();
                            view! {
                                <a
                                    href=entry.href
                                    class=if entry.active { "nav-link active" } else { "nav-link" }
                                    aria-current=if entry.active { Some("page") } else { None }
                                    on:click=move |ev: ev::MouseEvent| {
                                        // The controller pushes the fragment itself
                                        ev.prevent_default();
                                        on_navigate.call(key);
                                    }
                                >
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </aside>
    }
}
