//! New Task Form Component
//!
//! Form for creating tasks. Creation goes through a short simulated
//! delay; the submit control is disabled while the pending flag is set,
//! so creations can never overlap.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::Priority;
use crate::store::{store_add_task, use_app_store, validated_task};

/// Simulated creation latency
const CREATE_DELAY_MS: u32 = 500;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Medium);
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        // Snapshot the form at submit; edits during the delay are ignored
        let Some(task) = validated_task(&title.get(), &description.get(), priority.get()) else {
            set_error.set(Some(ctx.t("emptyTitleError")));
            return;
        };
        set_error.set(None);
        set_pending.set(true);

        spawn_local(async move {
            TimeoutFuture::new(CREATE_DELAY_MS).await;
            web_sys::console::log_1(&format!("[TASKS] created {}", task.id).into());
            store_add_task(&store, task);
            set_title.set(String::new());
            set_description.set(String::new());
            set_priority.set(Priority::Medium);
            set_pending.set(false);
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="form-field">
                <label for="task-title">{move || ctx.t("taskTitle")}</label>
                <input
                    id="task-title"
                    type="text"
                    placeholder=move || ctx.t("taskTitlePlaceholder")
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label for="task-description">{move || ctx.t("taskDescription")}</label>
                <input
                    id="task-description"
                    type="text"
                    placeholder=move || ctx.t("taskDescriptionPlaceholder")
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label for="task-priority">{move || ctx.t("taskPriority")}</label>
                <select
                    id="task-priority"
                    prop:value=move || priority.get().as_key().to_string()
                    on:change=move |ev| set_priority.set(Priority::from_key(&event_target_value(&ev)))
                >
                    <option value="high">{move || ctx.t("high")}</option>
                    <option value="medium">{move || ctx.t("medium")}</option>
                    <option value="low">{move || ctx.t("low")}</option>
                </select>
            </div>
            <button type="submit" class="add-task-btn" disabled=move || pending.get()>
                {move || if pending.get() { ctx.t("adding") } else { ctx.t("addTask") }}
            </button>
            {move || error.get().map(|message| view! {
                <div class="form-error">
                    <span class="form-error-icon">"⚠"</span>
                    {message}
                </div>
            })}
        </form>
    }
}
