//! Stock Table Component
//!
//! Two-column table of divergent stocks and their signal dates.

use leptos::*;

use crate::state::global::GlobalState;

/// Divergence table, or a placeholder while the list is empty
#[component]
pub fn StockTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let stocks = state.stocks;
    let is_running = state.is_running;

    view! {
        {move || {
            let rows = stocks.get();
            if rows.is_empty() {
                // Placeholder text keyed off the analysis job state
                let placeholder = if is_running.get() {
                    "Analyzing stocks, please wait..."
                } else {
                    "Loading stock list..."
                };
                view! {
                    <p class="text-gray-400">{placeholder}</p>
                }.into_view()
            } else {
                view! {
                    <table class="w-full text-left border-collapse">
                        <thead>
                            <tr class="border-b border-gray-700">
                                <th class="py-2 pr-4">"Symbol"</th>
                                <th class="py-2">"Divergence Dates"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|stock| {
                                view! {
                                    <tr class="border-b border-gray-700 last:border-0">
                                        <td class="py-2 pr-4 font-semibold">{stock.stock_id.clone()}</td>
                                        <td class="py-2 text-gray-300">{stock.joined_dates()}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }
        }}
    }
}
