//! Top Bar Component

use bizdash::render::TITLE;
use bizdash::Theme;
use leptos::*;

/// Page title and theme toggle
///
/// The button offers the mode that is not currently active.
#[component]
pub fn TopBar(
    #[prop(into)]
    theme: Signal<Theme>,
    #[prop(into)]
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="topbar" role="banner">
            <h1 class="title">{TITLE}</h1>
            <div class="topbar-actions">
                <button
                    class="btn-theme"
                    on:click=move |_| on_toggle_theme.call(())
                    aria-label=move || theme.get().toggle_aria_label()
                >
                    {move || theme.get().toggle_label()}
                </button>
            </div>
        </header>
    }
}
