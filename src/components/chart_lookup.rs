//! Chart Lookup Component
//!
//! Form for requesting a rendered chart for one stock symbol.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::polling::fetch_chart_for_stock;

/// Chart lookup form: symbol input plus submit button
#[component]
pub fn ChartLookup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let selected = state.selected_stock_id;

    let on_submit = {
        let state = state.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            fetch_chart_for_stock(state.clone());
        }
    };

    view! {
        <form on:submit=on_submit class="flex space-x-2">
            <input
                type="text"
                placeholder="Stock symbol (e.g. 2330)"
                prop:value=move || selected.get()
                on:input=move |ev| selected.set(event_target_value(&ev))
                class="flex-1 bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="submit"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
            >
                "View Chart"
            </button>
        </form>
    }
}
