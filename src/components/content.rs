//! Content View Component
//!
//! Renders the panel for the active route; anything unrecognized falls
//! through to the localized not-found heading.

use leptos::prelude::*;

use crate::components::DashboardPanel;
use crate::context::AppContext;
use crate::nav::Panel;

#[component]
pub fn ContentView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="content-view">
            {move || match Panel::for_route(&ctx.active_route.get()) {
                Panel::Dashboard => view! { <DashboardPanel /> }.into_any(),
                Panel::Lectures => view! {
                    <h2 class="panel-heading">{ctx.t("lecturesPage")}</h2>
                }.into_any(),
                Panel::Topics => view! {
                    <h2 class="panel-heading">{ctx.t("topicsPage")}</h2>
                }.into_any(),
                Panel::Analytics => view! {
                    <h2 class="panel-heading">{ctx.t("analyticsPage")}</h2>
                }.into_any(),
                Panel::Settings => view! {
                    <div class="panel settings-panel">
                        <h2>{ctx.t("settings")}</h2>
                    </div>
                }.into_any(),
                Panel::NotFound => view! {
                    <h2 class="panel-heading">{ctx.t("notFound")}</h2>
                }.into_any(),
            }}
        </div>
    }
}
