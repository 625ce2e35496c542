//! Sidebar Component
//!
//! Collapsible sidebar with brand header and the navigation tree.

use leptos::prelude::*;

use crate::components::NavItemRow;
use crate::context::AppContext;
use crate::nav::NAV_ENTRIES;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let aside_class = move || {
        if ctx.sidebar_open.get() {
            "sidebar open"
        } else {
            "sidebar collapsed"
        }
    };

    view! {
        <aside class=aside_class>
            <div class="sidebar-header">
                <Show when=move || ctx.sidebar_open.get()>
                    <div class="sidebar-brand">
                        <span class="brand-icon">"🖥"</span>
                        <span class="brand-title">{move || ctx.t("title")}</span>
                    </div>
                </Show>
                <button
                    class="sidebar-toggle"
                    title=move || {
                        if ctx.sidebar_open.get() {
                            ctx.t("closeMenu")
                        } else {
                            ctx.t("openMenu")
                        }
                    }
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    "☰"
                </button>
            </div>
            <nav class="sidebar-nav">
                {NAV_ENTRIES.iter().map(|entry| {
                    view! { <NavItemRow entry=*entry /> }
                }).collect_view()}
            </nav>
        </aside>
    }
}
