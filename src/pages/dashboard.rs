//! Dashboard Page
//!
//! The single dashboard view: divergence table, analysis status, and
//! per-stock chart lookup.

use leptos::*;

use crate::components::{ChartLookup, ChartView, StockTable};
use crate::state::global::GlobalState;
use crate::state::polling::start_polling;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Kick off the poll loop. `start_polling` registers its own cleanup, so
    // the interval dies with this view.
    start_polling(state.clone());

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"MACD Divergence Analysis"</h1>
                <p class="text-gray-400 mt-1">"Stocks flagged with MACD divergence, refreshed live"</p>
            </div>

            <ErrorLine />
            <ProgressLine />

            // Divergence list
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Divergent Stocks"</h2>
                <StockTable />
            </section>

            // Chart lookup
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Chart Lookup"</h2>
                <ChartLookup />
                <ChartView />
            </section>
        </div>
    }
}

/// Red error line, rendered only while an error is set
#[component]
fn ErrorLine() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;

    view! {
        {move || {
            error.get().map(|message| view! {
                <p class="text-red-400">{message}</p>
            })
        }}
    }
}

/// Analysis progress line, rendered only while the backend job is running
#[component]
fn ProgressLine() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let progress = state.progress;
    let is_running = state.is_running;

    view! {
        {move || {
            if is_running.get() {
                Some(view! {
                    <p class="text-gray-300">
                        {move || format!("Analysis progress: {}%", progress.get())}
                    </p>
                })
            } else {
                None
            }
        }}
    }
}
