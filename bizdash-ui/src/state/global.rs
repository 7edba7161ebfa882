//! Global Application State
//!
//! Wraps the [`Dashboard`] controller in Leptos signals. The controller stays
//! the single owner of theme, tab and dataset; an observer copies every new
//! state into `snapshot`, and the derived view models are memoized on the
//! dataset alone.

use std::rc::Rc;

use bizdash::{Dashboard, DashboardState, Dataset, Tab, Theme, ViewModels};
use leptos::*;

use crate::history::BrowserHistory;
use crate::storage::LocalStore;

/// Controller wired to `localStorage` and `window.history`
pub type BrowserDashboard = Dashboard<LocalStore, BrowserHistory>;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The controller; dropped with the root owner, which unsubscribes it
    pub dashboard: StoredValue<Rc<BrowserDashboard>>,
    /// Latest controller state
    pub snapshot: RwSignal<DashboardState>,
    /// Dataset, only notifies when it actually changes
    pub dataset: Memo<Dataset>,
    /// Chart series, insights and cards for the current dataset
    pub views: Memo<ViewModels>,
}

/// Mount the controller and provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let dashboard = Rc::new(Dashboard::mount(LocalStore, BrowserHistory::new()));
    let snapshot = create_rw_signal(dashboard.state());

    dashboard.observe(move |state| snapshot.set(state.clone()));

    let dataset = create_memo(move |_| snapshot.with(|s| s.dataset.clone()));
    let views = create_memo(move |_| dataset.with(ViewModels::derive));

    let state = GlobalState {
        dashboard: store_value(dashboard),
        snapshot,
        dataset,
        views,
    };

    provide_context(state);
    state
}

impl GlobalState {
    pub fn theme(&self) -> Theme {
        self.snapshot.with(|s| s.theme)
    }

    pub fn active_tab(&self) -> Tab {
        self.snapshot.with(|s| s.active_tab)
    }

    /// Sidebar navigation intent
    pub fn navigate(&self, key: &str) {
        self.dashboard.with_value(|d| {
            d.navigate(key);
        });
    }

    pub fn toggle_theme(&self) {
        self.dashboard.with_value(|d| {
            d.toggle_theme();
        });
    }

    /// Restore the sample dataset; returns whether it was saved
    pub fn reset_dataset(&self) -> bool {
        self.dashboard.with_value(|d| match d.reset_dataset() {
            Ok(()) => true,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to save dataset: {}", e).into());
                false
            }
        })
    }
}
