//! Task Card Component
//!
//! A single task: completion check, priority badge, tags, dates, delete.

use chrono::Local;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::dates::short_date;
use crate::models::Task;
use crate::priority::PriorityBand;

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let completed = task.completed;
    let complete_id = task.id.clone();
    let delete_id = task.id.clone();
    let badge_class = format!("priority-badge {}", PriorityBand::of(task.priority).class());
    let due = task.due_at.map(|due| short_date(&due, &Local));
    let created = short_date(&task.created_at, &Local);
    let description = task.description.filter(|text| !text.is_empty());
    let tags = task.tags.unwrap_or_default();

    view! {
        <div class=if completed { "card task-card completed" } else { "card task-card" }>
            <button
                type="button"
                class=if completed { "check-btn checked" } else { "check-btn" }
                on:click=move |_| {
                    if !completed {
                        ctx.complete(complete_id.clone());
                    }
                }
            >
                {completed.then_some("✓")}
            </button>

            <div class="task-body">
                <div class="task-heading">
                    <h3 class="task-title">{task.title}</h3>
                    <span class=badge_class>"Prioridad: " {task.priority}</span>
                </div>

                {description.map(|text| view! { <p class="task-description">{text}</p> })}

                {(!tags.is_empty()).then(|| view! {
                    <div class="tag-list">
                        {tags.into_iter().map(|tag| view! { <span class="tag">"#" {tag}</span> }).collect_view()}
                    </div>
                })}

                <div class="task-footer">
                    <div class="task-dates">
                        {due.map(|day| view! { <span>"Fecha: " {day}</span> })}
                        <span>"Creada: " {created}</span>
                    </div>
                    <button
                        type="button"
                        class="delete-btn"
                        on:click=move |_| ctx.delete(delete_id.clone())
                    >
                        "Eliminar"
                    </button>
                </div>
            </div>
        </div>
    }
}
