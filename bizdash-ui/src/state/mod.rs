//! State Management
//!
//! The dashboard controller and the reactive snapshot the components read.

pub mod global;

pub use global::{provide_global_state, BrowserDashboard, GlobalState};
