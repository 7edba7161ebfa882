//! App Root Component
//!
//! Layout shell: sidebar, top bar and the content area for the active tab.

use leptos::*;

use crate::components::{Sidebar, TopBar};
use crate::pages::TabContent;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();

    // Mirror the theme onto <html data-theme="..."> for the stylesheet
    create_effect(move |_| {
        let theme = state.theme();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    });

    let current_tab = Signal::derive(move || state.active_tab());
    let theme = Signal::derive(move || state.theme());

    view! {
        <div class="dash-root">
            <Sidebar
                current_tab=current_tab
                on_navigate=move |key: &'static str| state.navigate(key)
            />
            <div class="dash-main">
                <TopBar theme=theme on_toggle_theme=move |_| state.toggle_theme() />
                <main class="dash-content" role="main">
                    <TabContent />
                </main>
            </div>
        </div>
    }
}
