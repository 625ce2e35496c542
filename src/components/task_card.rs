//! Task Card Component
//!
//! One task in the list: title, priority badge, description, completed
//! toggle and delete button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;
use crate::store::{store_patch_task, store_remove_task, use_app_store, TaskPatch};

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let priority = task.priority;

    view! {
        <div class="task-card">
            <div class="task-card-header">
                <h3 class="task-title">{task.title.clone()}</h3>
                <span class=priority.badge_class()>{move || ctx.t(priority.as_key())}</span>
            </div>
            <p class="task-description">{task.description.clone()}</p>
            <div class="task-card-footer">
                <label class="task-completed">
                    <input
                        type="checkbox"
                        prop:checked=task.completed
                        on:change=move |ev| {
                            store_patch_task(
                                &store,
                                &toggle_id,
                                TaskPatch::completed(event_target_checked(&ev)),
                            );
                        }
                    />
                    <span>{move || ctx.t("completed")}</span>
                </label>
                <button
                    class="delete-task-btn"
                    on:click=move |_| store_remove_task(&store, &delete_id)
                >
                    {move || ctx.t("delete")}
                </button>
            </div>
        </div>
    }
}
