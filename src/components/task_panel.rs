//! Task Panel Component
//!
//! Creation form next to the task list.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskCard};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class="task-panel">
            <h2>{move || ctx.t("tasksList")}</h2>
            <div class="task-panel-grid">
                <NewTaskForm />
                <div class="task-list-column">
                    <span class="field-label">{move || ctx.t("tasksList")}</span>
                    <div class="task-list">
                        <For
                            each=move || store.tasks().get()
                            key=|task| task.id.clone()
                            children=move |task| view! { <TaskCard task=task /> }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
