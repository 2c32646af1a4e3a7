//! Global Application State
//!
//! Reactive state management using Leptos signals. Every field is owned by
//! the dashboard controller; mutation flows through the transition methods
//! below, components only read.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Stocks currently flagged with a MACD divergence
    pub stocks: RwSignal<Vec<DivergentStock>>,
    /// Stock symbol entered by the user for chart lookup
    pub selected_stock_id: RwSignal<String>,
    /// Absolute URL of the last successfully fetched chart (empty = unset)
    pub chart_url: RwSignal<String>,
    /// Error message to display (None = none)
    pub error: RwSignal<Option<String>>,
    /// Analysis job progress, integer percent
    pub progress: RwSignal<u32>,
    /// Whether the backend analysis job is currently running
    pub is_running: RwSignal<bool>,
    /// Timestamp of the last successful list refresh (epoch millis)
    pub last_updated: RwSignal<Option<i64>>,
}

/// One stock flagged by the backend, with the dates the divergence fired
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivergentStock {
    pub stock_id: String,
    pub divergent_dates: Vec<String>,
}

impl DivergentStock {
    /// Divergence dates as a single display string
    pub fn joined_dates(&self) -> String {
        self.divergent_dates.join(", ")
    }
}

/// Analysis job status reported by the backend
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
pub struct AnalysisProgress {
    pub progress: u32,
    pub is_running: bool,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    /// Fresh state: empty list, no chart, no error, analysis idle
    pub fn new() -> Self {
        Self {
            stocks: create_rw_signal(Vec::new()),
            selected_stock_id: create_rw_signal(String::new()),
            chart_url: create_rw_signal(String::new()),
            error: create_rw_signal(None),
            progress: create_rw_signal(0),
            is_running: create_rw_signal(false),
            last_updated: create_rw_signal(None),
        }
    }

    /// Apply the outcome of a divergence-list refresh.
    ///
    /// The list replaces wholesale on success. A failure leaves the previous
    /// rows visible (stale-but-valid) and only overwrites the error message.
    pub fn apply_stock_list(&self, result: Result<Vec<DivergentStock>, String>) {
        match result {
            Ok(stocks) => {
                self.stocks.set(stocks);
                self.error.set(None);
            }
            Err(reason) => {
                self.error
                    .set(Some(format!("Unable to fetch divergence list: {}", reason)));
            }
        }
    }

    /// Apply the outcome of a status poll.
    ///
    /// Failures change nothing here; the caller logs them to the console.
    /// Status polling is non-critical and never surfaces a visible error.
    pub fn apply_progress(&self, result: Result<AnalysisProgress, String>) {
        if let Ok(status) = result {
            self.progress.set(status.progress);
            self.is_running.set(status.is_running);
        }
    }

    /// Apply the outcome of a chart lookup.
    ///
    /// A failure keeps any previously displayed chart.
    pub fn apply_chart_lookup(&self, result: Result<String, String>) {
        match result {
            Ok(url) => {
                self.chart_url.set(url);
                self.error.set(None);
            }
            Err(reason) => {
                self.error
                    .set(Some(format!("Unable to fetch chart: {}", reason)));
            }
        }
    }

    /// Set the visible error message, overwriting any previous one
    pub fn set_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
    }

    /// Clear the visible error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stock() -> DivergentStock {
        DivergentStock {
            stock_id: "2330".to_string(),
            divergent_dates: vec!["2024-01-05".to_string(), "2024-02-10".to_string()],
        }
    }

    #[test]
    fn test_joined_dates() {
        assert_eq!(sample_stock().joined_dates(), "2024-01-05, 2024-02-10");
    }

    #[test]
    fn test_joined_dates_single() {
        let stock = DivergentStock {
            stock_id: "2317".to_string(),
            divergent_dates: vec!["2024-03-01".to_string()],
        };
        assert_eq!(stock.joined_dates(), "2024-03-01");
    }

    #[test]
    fn test_stock_list_success_replaces_and_clears_error() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.set_error("stale failure");

        state.apply_stock_list(Ok(vec![sample_stock()]));

        assert_eq!(state.stocks.get_untracked(), vec![sample_stock()]);
        assert_eq!(state.error.get_untracked(), None);
        runtime.dispose();
    }

    #[test]
    fn test_stock_list_failure_keeps_previous_rows() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.apply_stock_list(Ok(vec![sample_stock()]));

        state.apply_stock_list(Err("connection refused".to_string()));

        assert_eq!(state.stocks.get_untracked(), vec![sample_stock()]);
        let error = state.error.get_untracked().expect("error should be set");
        assert!(error.contains("connection refused"));
        runtime.dispose();
    }

    #[test]
    fn test_progress_failure_is_silent() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.apply_progress(Ok(AnalysisProgress {
            progress: 40,
            is_running: true,
        }));

        state.apply_progress(Err("connection refused".to_string()));

        assert_eq!(state.progress.get_untracked(), 40);
        assert!(state.is_running.get_untracked());
        assert_eq!(state.error.get_untracked(), None);
        runtime.dispose();
    }

    #[test]
    fn test_chart_failure_keeps_previous_chart() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.apply_chart_lookup(Ok("https://backend/charts/2330.png".to_string()));

        state.apply_chart_lookup(Err("HTTP 500".to_string()));

        assert_eq!(
            state.chart_url.get_untracked(),
            "https://backend/charts/2330.png"
        );
        let error = state.error.get_untracked().expect("error should be set");
        assert!(error.contains("HTTP 500"));
        runtime.dispose();
    }

    #[test]
    fn test_error_overwrites_not_appends() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.apply_stock_list(Err("first".to_string()));
        state.apply_stock_list(Err("second".to_string()));

        let error = state.error.get_untracked().expect("error should be set");
        assert!(error.contains("second"));
        assert!(!error.contains("first"));
        runtime.dispose();
    }

    #[test]
    fn test_first_poll_end_to_end() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        assert!(state.stocks.get_untracked().is_empty());
        assert!(!state.is_running.get_untracked());

        let list: crate::api::client::StockListResponse = serde_json::from_str(
            r#"{ "stocks": [{ "stockId": "2330", "divergentDates": ["2024-01-05", "2024-02-10"] }] }"#,
        )
        .unwrap();
        let status: AnalysisProgress =
            serde_json::from_str(r#"{ "progress": 40, "is_running": true }"#).unwrap();

        state.apply_stock_list(Ok(list.stocks));
        state.apply_progress(Ok(status));

        let stocks = state.stocks.get_untracked();
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].stock_id, "2330");
        assert_eq!(stocks[0].joined_dates(), "2024-01-05, 2024-02-10");
        assert_eq!(format!("{}%", state.progress.get_untracked()), "40%");
        assert!(state.is_running.get_untracked());
        runtime.dispose();
    }
}
