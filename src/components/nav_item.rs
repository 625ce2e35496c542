//! Nav Item Component
//!
//! One top-level navigation entry. A Branch toggles its own submenu,
//! a Leaf navigates. Collapsing the sidebar hides the submenu without
//! resetting the expansion flag.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::nav::NavEntry;

#[component]
pub fn NavItemRow(entry: NavEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (submenu_open, set_submenu_open) = signal(false);

    let on_entry_click = move |_| match entry {
        NavEntry::Branch(_) => set_submenu_open.update(|open| *open = !*open),
        NavEntry::Leaf(leaf) => ctx.navigate(leaf.route),
    };

    let label_class = move || {
        if ctx.sidebar_open.get() {
            "nav-label"
        } else {
            "nav-label hidden"
        }
    };

    view! {
        <div class="nav-entry">
            <div class="nav-row" on:click=on_entry_click>
                <span class="nav-icon">{entry.icon()}</span>
                <span class=label_class>{move || ctx.t(entry.label())}</span>
                {match entry {
                    NavEntry::Branch(_) => view! {
                        <Show when=move || ctx.sidebar_open.get()>
                            <span class="nav-chevron">
                                {move || if submenu_open.get() { "▲" } else { "▼" }}
                            </span>
                        </Show>
                    }.into_any(),
                    NavEntry::Leaf(_) => view! { <span></span> }.into_any(),
                }}
            </div>
            {match entry {
                NavEntry::Branch(branch) => {
                    let children = branch.children;
                    view! {
                        <Show when=move || submenu_open.get() && ctx.sidebar_open.get()>
                            <div class="submenu">
                                {children.iter().map(|leaf| {
                                    let route = leaf.route;
                                    view! {
                                        <div
                                            class="submenu-item"
                                            on:click=move |_| ctx.navigate(route)
                                        >
                                            {move || ctx.t(leaf.label)}
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    }.into_any()
                }
                NavEntry::Leaf(_) => view! { <span></span> }.into_any(),
            }}
        </div>
    }
}
