//! Dashboard Panel Component
//!
//! Summary counters plus the task panel.

use leptos::prelude::*;

use crate::components::{StatCard, TaskPanel};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let task_count = Signal::derive(move || store.tasks().get().len().to_string());

    view! {
        <div class="panel dashboard-panel">
            <h2>{move || ctx.t("dashboard")}</h2>
            <div class="stat-grid">
                <StatCard
                    label="totalViews"
                    value=Signal::derive(|| "12,345".to_string())
                    accent="accent-blue"
                />
                <StatCard
                    label="totalLectures"
                    value=Signal::derive(|| "56".to_string())
                    accent="accent-green"
                />
                <StatCard label="tasks" value=task_count accent="accent-yellow" />
            </div>
            <TaskPanel />
        </div>
    }
}
