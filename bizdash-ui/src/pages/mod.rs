//! Pages
//!
//! One component per tab. [`TabContent`] picks the page from the active tab.

pub mod expenses;
pub mod overview;
pub mod revenue;
pub mod sales;
pub mod settings;

use bizdash::Tab;
use leptos::*;

use crate::state::global::GlobalState;

pub use expenses::Expenses;
pub use overview::Overview;
pub use revenue::Revenue;
pub use sales::Sales;
pub use settings::Settings;

/// Content area for the active tab
#[component]
pub fn TabContent() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let active = create_memo(move |_| state.active_tab());

    move || match active.get() {
        Tab::Overview => view! { <Overview /> }.into_view(),
        Tab::Sales => view! { <Sales /> }.into_view(),
        Tab::Revenue => view! { <Revenue /> }.into_view(),
        Tab::Expenses => view! { <Expenses /> }.into_view(),
        Tab::Settings => view! { <Settings /> }.into_view(),
    }
}
