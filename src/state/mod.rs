//! State Management
//!
//! Global application state and the backend polling loop.

pub mod global;
pub mod polling;

pub use global::{provide_global_state, AnalysisProgress, DivergentStock, GlobalState};
pub use polling::{fetch_chart_for_stock, start_polling};
