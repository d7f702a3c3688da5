//! Task List Component
//!
//! Loading indicator, empty state, or one card per task.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="task-list">
            {move || {
                if store.loading().get() {
                    view! {
                        <div class="card placeholder"><p>"Cargando tareas..."</p></div>
                    }.into_any()
                } else if store.tasks().with(Vec::is_empty) {
                    let message = store.filter().get().empty_message();
                    view! {
                        <div class="card placeholder"><p>{message}</p></div>
                    }.into_any()
                } else {
                    view! {
                        <For
                            each=move || store.tasks().get()
                            key=|task| (task.id.clone(), task.completed, task.updated_at)
                            children=move |task| view! { <TaskCard task=task /> }
                        />
                    }.into_any()
                }
            }}
        </div>
    }
}
