//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod metric_card;
pub mod quick_insights;
pub mod sidebar;
pub mod top_bar;

pub use chart::{Chart, ChartKind};
pub use metric_card::MetricCard;
pub use quick_insights::QuickInsights;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
