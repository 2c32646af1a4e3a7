//! Chart Viewer Component
//!
//! Displays the last successfully fetched chart image.

use leptos::*;

use crate::state::global::GlobalState;

/// Chart image bound to the last successful lookup
#[component]
pub fn ChartView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let chart_url = state.chart_url;

    view! {
        <div class="mt-6">
            {move || {
                let url = chart_url.get();
                if url.is_empty() {
                    view! {
                        <p class="text-gray-400">"Enter a stock symbol to view its chart"</p>
                    }.into_view()
                } else {
                    view! {
                        <img src=url alt="Stock chart" class="w-full rounded-lg" />
                    }.into_view()
                }
            }}
        </div>
    }
}
