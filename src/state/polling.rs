//! Backend Polling
//!
//! Drives the dashboard refresh cycle: one immediate fetch of the divergence
//! list and analysis status when the view activates, then both again every
//! two seconds until the view is torn down.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Poll interval for the divergence list and analysis status
pub const POLL_INTERVAL_MS: u32 = 2_000;

/// Refresh the divergence list once.
pub fn refresh_divergence_list(state: GlobalState) {
    spawn_local(async move {
        let result = api::fetch_stocks().await;
        if let Err(reason) = &result {
            web_sys::console::error_1(&format!("Error fetching stocks: {}", reason).into());
        }
        let refreshed = result.is_ok();
        state.apply_stock_list(result);
        if refreshed {
            state
                .last_updated
                .set(Some(chrono::Utc::now().timestamp_millis()));
        }
    });
}

/// Refresh the analysis status once.
///
/// Failures are logged to the console only: status polling is non-critical
/// and the previous values stay in place.
pub fn refresh_status(state: GlobalState) {
    spawn_local(async move {
        let result = api::fetch_progress().await;
        if let Err(reason) = &result {
            web_sys::console::error_1(&format!("Error fetching progress: {}", reason).into());
        }
        state.apply_progress(result);
    });
}

/// Fetch the chart for the symbol currently entered by the user.
///
/// Independent of the poll timer and may run concurrently with it. An empty
/// symbol never issues a network call.
pub fn fetch_chart_for_stock(state: GlobalState) {
    let stock_id = state.selected_stock_id.get_untracked();
    if stock_id.is_empty() {
        state.set_error("Please enter a stock symbol");
        return;
    }

    spawn_local(async move {
        let result = api::fetch_stock_chart(&stock_id).await;
        if let Err(reason) = &result {
            web_sys::console::error_1(
                &format!("Error fetching chart for {}: {}", stock_id, reason).into(),
            );
        }
        state.apply_chart_lookup(result);
    });
}

/// Start polling for the lifetime of the current reactive owner.
///
/// Both refreshes run once immediately, then on every interval tick. Ticks
/// are unconditional: a response from tick N may still be in flight when
/// tick N+1 fires, and results apply last-write-wins. The interval handle is
/// owned by `on_cleanup`, so tearing the view down drops it and cancels the
/// underlying timer on every exit path.
pub fn start_polling(state: GlobalState) {
    refresh_divergence_list(state.clone());
    refresh_status(state.clone());

    let interval = gloo_timers::callback::Interval::new(POLL_INTERVAL_MS, move || {
        refresh_divergence_list(state.clone());
        refresh_status(state.clone());
    });

    on_cleanup(move || drop(interval));
}
