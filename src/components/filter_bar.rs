//! Filter Bar Component
//!
//! Filter buttons plus the toggle for the creation form.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{store_set_filter, store_toggle_form, use_app_store, BoardStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="card toolbar">
            <div class="filter-group">
                {Filter::DISPLAY_ORDER.iter().map(|&filter| {
                    let is_active = move || store.filter().get() == filter;
                    let label = move || {
                        if filter == Filter::All {
                            format!("{} ({})", filter.label(), store.tasks().with(Vec::len))
                        } else {
                            filter.label().to_string()
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| store_set_filter(&store, filter)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
            <button
                type="button"
                class="new-task-btn"
                on:click=move |_| store_toggle_form(&store)
            >
                {move || if store.show_form().get() { "✕ Cancelar" } else { "+ Nueva Tarea" }}
            </button>
        </div>
    }
}
