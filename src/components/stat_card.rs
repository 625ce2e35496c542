//! Stat Card Component
//!
//! Summary counter shown on the dashboard.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn StatCard(
    /// Translation key for the card label
    label: &'static str,
    value: Signal<String>,
    accent: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="stat-card">
            <h3 class="stat-label">{move || ctx.t(label)}</h3>
            <p class=format!("stat-value {}", accent)>{move || value.get()}</p>
        </div>
    }
}
