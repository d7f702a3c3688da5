//! New Task Form Component
//!
//! Creation form; values live in the store so a failed submit keeps them.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::draft::{MAX_PRIORITY, MIN_PRIORITY};
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.create();
    };

    view! {
        <div class="card form-card">
            <h2>"Crear Nueva Tarea"</h2>
            <form class="new-task-form" on:submit=on_submit>
                <label class="field">
                    <span>"Título *"</span>
                    <input
                        type="text"
                        required
                        placeholder="Ej: Comprar leche"
                        prop:value=move || store.draft().with(|d| d.title.clone())
                        on:input=move |ev| { store.draft().write().title = event_target_value(&ev); }
                    />
                </label>

                <label class="field">
                    <span>"Descripción"</span>
                    <textarea
                        rows="3"
                        placeholder="Detalles adicionales..."
                        prop:value=move || store.draft().with(|d| d.description.clone())
                        on:input=move |ev| { store.draft().write().description = event_target_value(&ev); }
                    />
                </label>

                <div class="field-row">
                    <label class="field">
                        <span>"Prioridad (1-10)"</span>
                        <input
                            type="number"
                            min={MIN_PRIORITY.to_string()}
                            max={MAX_PRIORITY.to_string()}
                            prop:value=move || store.draft().with(|d| d.priority.to_string())
                            on:input=move |ev| { store.draft().write().set_priority_input(&event_target_value(&ev)); }
                        />
                    </label>

                    <label class="field">
                        <span>"Fecha de Vencimiento"</span>
                        <input
                            type="datetime-local"
                            prop:value=move || store.draft().with(|d| d.due_at.clone())
                            on:input=move |ev| { store.draft().write().due_at = event_target_value(&ev); }
                        />
                    </label>
                </div>

                <label class="field">
                    <span>"Etiquetas (separadas por coma)"</span>
                    <input
                        type="text"
                        placeholder="Ej: trabajo, urgente, importante"
                        prop:value=move || store.draft().with(|d| d.tags.clone())
                        on:input=move |ev| { store.draft().write().tags = event_target_value(&ev); }
                    />
                </label>

                <button type="submit" class="submit-btn">"Crear Tarea"</button>
            </form>
        </div>
    }
}
