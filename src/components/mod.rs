//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod chart_lookup;
pub mod stock_table;

pub use chart::ChartView;
pub use chart_lookup::ChartLookup;
pub use stock_table::StockTable;
