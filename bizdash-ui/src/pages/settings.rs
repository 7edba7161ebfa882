//! Settings Page
//!
//! Current theme, a second toggle and a sample data reset.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (reset_status, set_reset_status) = create_signal(None::<bool>);

    let on_reset = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Replace the dataset with the sample data?").ok())
            .unwrap_or(false);
        if confirmed {
            set_reset_status.set(Some(state.reset_dataset()));
        }
    };

    view! {
        <section class="card glass settings" aria-label="Settings">
            <div class="card-header">
                <h3>"Settings"</h3>
            </div>

            <div class="setting-row">
                <span>"Theme: " {move || state.theme().to_string()}</span>
                <button class="btn" on:click=move |_| state.toggle_theme()>
                    "Toggle Theme"
                </button>
            </div>

            <div class="setting-row">
                <span>"Dataset"</span>
                <button class="btn btn-danger" on:click=on_reset>
                    "Reset sample data"
                </button>
            </div>

            {move || reset_status.get().map(|saved| {
                let (class, message) = if saved {
                    ("status ok", "Sample data restored")
                } else {
                    ("status error", "Sample data restored but could not be saved")
                };
                view! { <p class=class role="status">{message}</p> }
            })}
        </section>
    }
}
