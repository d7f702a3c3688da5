//! Task Board App
//!
//! Root component: header, filter bar, creation form, task list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NewTaskForm, TaskList};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::default());
    let ctx = AppContext::new(store, ApiConfig::from_build_env());

    // Provide store and context to all children
    provide_context(store);
    provide_context(ctx);

    // Load on mount and whenever the filter changes
    Effect::new(move |_| {
        let filter = store.filter().get();
        log::debug!(target: "app", "filter is now {:?}", filter);
        ctx.reload();
    });

    view! {
        <div class="page">
            <div class="container">
                <header class="card header">
                    <h1>"Todo List - Mindora"</h1>
                    <p class="subtitle">"Sistema de gestión de tareas"</p>
                </header>

                <FilterBar />

                <Show when=move || store.show_form().get()>
                    <NewTaskForm />
                </Show>

                <TaskList />
            </div>
        </div>
    }
}
